use tracing::trace;

use crate::core::Axis;
use crate::error::ScatterResult;
use crate::render::{RenderFrame, Renderer};

use super::ScatterChart;
use super::axis_render::push_axis_primitives;
use super::label_layout::push_label_primitives;
use super::point_render::push_point_primitives;

impl<R: Renderer> ScatterChart<R> {
    /// Materializes the chart as drawn at the current clock.
    ///
    /// Before a dataset is loaded the frame is empty.
    pub fn build_render_frame(&self) -> ScatterResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);
        let Some(layout) = self.layout.as_ref() else {
            return Ok(frame);
        };

        for axis in [Axis::X, Axis::Y] {
            push_axis_primitives(
                &mut frame,
                self.plot,
                axis,
                layout.axis(axis).displayed(self.clock_ms),
                self.config.tick_count,
            );
        }

        push_point_primitives(
            &mut frame,
            self.plot,
            &layout.dataset,
            &self.point_positions(),
            self.interaction.hovered(),
            self.config.point_style,
        );

        let mut labels = Vec::with_capacity(6);
        labels.extend(self.axis_labels(Axis::X));
        labels.extend(self.axis_labels(Axis::Y));
        push_label_primitives(&mut frame, &labels);

        self.push_tooltip_primitives(&mut frame);
        Ok(frame)
    }

    pub fn render(&mut self) -> ScatterResult<()> {
        let frame = self.build_render_frame()?;
        trace!(
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            "render frame"
        );
        self.renderer.render(&frame)
    }
}

#[cfg(feature = "cairo-backend")]
impl ScatterChart<crate::render::CairoRenderer> {
    /// Renders the current frame onto an external cairo context.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ScatterResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_context(context, &frame)
    }
}
