mod animation;
mod animation_controller;
mod axis_render;
mod chart_config;
mod chart_init;
mod label_layout;
mod point_render;
mod render_coordinator;
mod selection_controller;
mod snapshot;
mod tooltip;
mod tooltip_controller;

pub use chart_config::{ChartConfig, PointStyle, TooltipOffset};
pub use label_layout::AxisLabel;
pub use snapshot::{ChartSnapshot, PointSnapshot};
pub use tooltip::{Tooltip, TooltipLine, format_metric_value};

use crate::core::{Axis, Dataset, LinearScale, PlotArea};
use crate::interaction::{AxisSelection, InteractionState};
use crate::render::Renderer;

use animation::{AxisTrack, PointTrack};

/// Everything derived from a loaded dataset.
#[derive(Debug, Clone)]
struct ChartLayout {
    dataset: Dataset,
    x_axis: AxisTrack,
    y_axis: AxisTrack,
    x_points: PointTrack,
    y_points: PointTrack,
}

impl ChartLayout {
    fn axis(&self, axis: Axis) -> &AxisTrack {
        match axis {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisTrack {
        match axis {
            Axis::X => &mut self.x_axis,
            Axis::Y => &mut self.y_axis,
        }
    }
}

/// Interactive scatter chart facade consumed by host applications.
///
/// `ScatterChart` owns the dataset, the axis selection, both scales with
/// their animations, hover state, and the rendering backend. Time only moves
/// when the host calls [`ScatterChart::step`].
#[derive(Debug)]
pub struct ScatterChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    plot: PlotArea,
    interaction: InteractionState,
    clock_ms: f64,
    layout: Option<ChartLayout>,
}

impl<R: Renderer> ScatterChart<R> {
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    /// `true` once a dataset has been loaded and laid out.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.layout.is_some()
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.layout.as_ref().map(|layout| &layout.dataset)
    }

    #[must_use]
    pub fn selection(&self) -> AxisSelection {
        self.interaction.selection()
    }

    /// Target scale for `axis` (the end state of any running animation).
    #[must_use]
    pub fn scale(&self, axis: Axis) -> Option<LinearScale> {
        self.layout.as_ref().map(|layout| layout.axis(axis).target())
    }

    /// Scale as currently drawn, possibly mid-transition.
    #[must_use]
    pub fn displayed_scale(&self, axis: Axis) -> Option<LinearScale> {
        self.layout
            .as_ref()
            .map(|layout| layout.axis(axis).displayed(self.clock_ms))
    }

    /// Current drawn `(x, y)` of every point in plot-area pixels.
    #[must_use]
    pub fn point_positions(&self) -> Vec<(f64, f64)> {
        let Some(layout) = &self.layout else {
            return Vec::new();
        };
        let xs = layout.x_points.displayed(self.clock_ms);
        let ys = layout.y_points.displayed(self.clock_ms);
        xs.into_iter().zip(ys).collect()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
