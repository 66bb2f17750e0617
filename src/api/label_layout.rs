use serde::Serialize;

use crate::core::{Axis, Margins, Metric, PlotArea};
use crate::interaction::{AxisSelection, LabelClass, label_classes};
use crate::render::{Color, FontWeight, RenderFrame, TextHAlign, TextPrimitive};

const LABEL_FONT_SIZE_PX: f64 = 14.0;
/// Gap between the x axis line and its label group.
const X_GROUP_OFFSET_PX: f64 = 20.0;
const X_LABEL_OFFSETS_PX: [f64; 3] = [20.0, 40.0, 60.0];
/// Distances from the left canvas edge for the rotated y labels.
const Y_LABEL_OFFSETS_PX: [f64; 3] = [50.0, 30.0, 10.0];

/// One clickable axis title with its position in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLabel {
    pub axis: Axis,
    pub metric: Metric,
    pub text: &'static str,
    pub class: LabelClass,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
}

/// The three labels of `axis`, with classes derived from `selection`.
pub(super) fn axis_labels(
    plot: PlotArea,
    margins: Margins,
    selection: AxisSelection,
    axis: Axis,
) -> [AxisLabel; 3] {
    let classes = label_classes(selection, axis);
    let mut slot = 0;
    classes.map(|(metric, class)| {
        let index = slot;
        slot += 1;
        let (x, y, rotation_deg) = match axis {
            Axis::X => {
                let (x, y) = plot.to_canvas(
                    plot.width / 2.0,
                    plot.height + X_GROUP_OFFSET_PX + X_LABEL_OFFSETS_PX[index],
                );
                (x, y, 0.0)
            }
            Axis::Y => {
                let (x, y) = plot.to_canvas(
                    -margins.left + Y_LABEL_OFFSETS_PX[index] + LABEL_FONT_SIZE_PX,
                    plot.height / 2.0,
                );
                (x, y, -90.0)
            }
        };
        AxisLabel {
            axis,
            metric,
            text: metric.axis_title(),
            class,
            x,
            y,
            rotation_deg,
        }
    })
}

pub(super) fn push_label_primitives(frame: &mut RenderFrame, labels: &[AxisLabel]) {
    for label in labels {
        let (color, weight) = match label.class {
            LabelClass::Active => (Color::BLACK, FontWeight::Bold),
            LabelClass::Inactive => (Color::GRAY, FontWeight::Normal),
        };
        frame.texts.push(
            TextPrimitive::new(
                label.text,
                label.x,
                label.y,
                LABEL_FONT_SIZE_PX,
                color,
                TextHAlign::Center,
            )
            .with_weight(weight)
            .with_rotation(label.rotation_deg)
            .with_class(label.class.as_str()),
        );
    }
}
