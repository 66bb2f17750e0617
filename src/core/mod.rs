pub mod metric;
pub mod padding;
pub mod record;
pub mod scale;
pub mod scale_builder;
pub mod ticks;
pub mod types;

pub use metric::{Axis, AxisChoice, Metric, XMetric, YMetric};
pub use padding::PaddingPolicy;
pub use record::{Dataset, Record};
pub use scale::LinearScale;
pub use scale_builder::{build_scale, metric_extent};
pub use ticks::format_tick;
pub use types::{Margins, PlotArea, Viewport};
