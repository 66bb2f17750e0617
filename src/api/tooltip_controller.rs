use tracing::trace;

use crate::error::{ScatterError, ScatterResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::{ScatterChart, Tooltip};

const TOOLTIP_FONT_SIZE_PX: f64 = 12.0;
const TOOLTIP_LINE_HEIGHT_PX: f64 = 16.0;
const TOOLTIP_PADDING_PX: f64 = 8.0;
/// Rough glyph advance used to size the box without a text shaper.
const TOOLTIP_CHAR_WIDTH_PX: f64 = 7.0;

impl<R: Renderer> ScatterChart<R> {
    /// Index of the topmost point under `(x, y)` in canvas pixels.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let radius = self.config.point_style.radius;
        self.point_positions()
            .into_iter()
            .enumerate()
            .rev()
            .find(|(_, (px, py))| {
                let (cx, cy) = self.plot.to_canvas(*px, *py);
                let (dx, dy) = (x - cx, y - cy);
                dx * dx + dy * dy <= radius * radius
            })
            .map(|(index, _)| index)
    }

    /// Tracks the pointer in canvas pixels; shows the tooltip over a point and
    /// hides it elsewhere. Returns the hovered index.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        let hit = self.hit_test(x, y);
        self.interaction.on_pointer_move(x, y, hit);
        hit
    }

    /// Shows the tooltip for point `index` directly.
    pub fn pointer_over(&mut self, index: usize) -> ScatterResult<Tooltip> {
        let Some(layout) = self.layout.as_ref() else {
            return Err(ScatterError::NotInitialized);
        };
        let Some(record) = layout.dataset.get(index) else {
            return Err(ScatterError::InvalidInput(format!(
                "point index {index} out of range for {} records",
                layout.dataset.len()
            )));
        };
        let tooltip = Tooltip::for_record(record, self.interaction.selection());
        trace!(index, state = %record.state, "tooltip shown");
        self.interaction.on_pointer_over(index);
        Ok(tooltip)
    }

    /// Hides the tooltip and clears hover highlighting.
    pub fn pointer_out(&mut self) {
        self.interaction.on_pointer_leave();
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.interaction.hovered()
    }

    /// Tooltip for the hovered point, formatted for the current selection.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        let index = self.interaction.hovered()?;
        let record = self.layout.as_ref()?.dataset.get(index)?;
        Some(Tooltip::for_record(record, self.interaction.selection()))
    }

    pub(super) fn push_tooltip_primitives(&self, frame: &mut RenderFrame) {
        let Some(tooltip) = self.tooltip() else {
            return;
        };
        let Some(index) = self.interaction.hovered() else {
            return;
        };
        let Some(&(px, py)) = self.point_positions().get(index) else {
            return;
        };

        let rows = tooltip.rows();
        let widest = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let width = widest as f64 * TOOLTIP_CHAR_WIDTH_PX + 2.0 * TOOLTIP_PADDING_PX;
        let height = rows.len() as f64 * TOOLTIP_LINE_HEIGHT_PX + 2.0 * TOOLTIP_PADDING_PX;

        // Box sits centered above the marker, then shifted by the offset.
        let (cx, cy) = self.plot.to_canvas(px, py);
        let offset = self.config.tooltip_offset;
        let left = cx - width / 2.0 + offset.left;
        let top = cy - self.config.point_style.radius - height + offset.top;

        frame.rects.push(
            RectPrimitive::new(left, top, width, height, Color::BLACK.with_alpha(0.8))
                .with_corner_radius(4.0),
        );
        for (line, row) in rows.into_iter().enumerate() {
            frame.texts.push(TextPrimitive::new(
                row,
                cx + offset.left,
                top + TOOLTIP_PADDING_PX + (line as f64 + 0.8) * TOOLTIP_LINE_HEIGHT_PX,
                TOOLTIP_FONT_SIZE_PX,
                Color::WHITE,
                TextHAlign::Center,
            ));
        }
    }
}
