mod frame;
mod null_renderer;
mod primitives;
mod svg;
mod transition;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, FontWeight, LinePrimitive, RectPrimitive, Stroke, TextHAlign,
    TextPrimitive,
};
pub use svg::SvgRenderer;
pub use transition::{DEFAULT_TRANSITION_MS, Easing, Timing, lerp};

use crate::error::ScatterResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from chart data and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()>;

    /// Tells the backend which host element the chart is mounted into.
    ///
    /// Called once when the chart is created. Backends that draw into a
    /// surface they own ignore it.
    fn mount(&mut self, _selector: &str) -> ScatterResult<()> {
        Ok(())
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
