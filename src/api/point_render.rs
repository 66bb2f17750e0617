use crate::core::{Dataset, LinearScale, Metric, PlotArea};
use crate::interaction::RequestId;
use crate::render::{CirclePrimitive, RenderFrame, TextHAlign, TextPrimitive, Timing};

use super::PointStyle;
use super::animation::{CoordAnimation, PointTrack};

/// Pixel coordinate of every record's `metric` under `scale`.
pub(super) fn project_coords(dataset: &Dataset, metric: Metric, scale: LinearScale) -> Vec<f64> {
    dataset.values(metric).map(|value| scale.map(value)).collect()
}

/// Starts moving every point on one axis to its position under `scale`.
///
/// Points start from where they are drawn at `now_ms`, so a change issued
/// mid-flight continues from the intermediate positions.
pub(super) fn render_points(
    track: &mut PointTrack,
    dataset: &Dataset,
    metric: Metric,
    scale: LinearScale,
    request: RequestId,
    timing: Timing,
) {
    let from = track.displayed(timing.start_ms);
    let to = project_coords(dataset, metric, scale);
    track.animation = Some(CoordAnimation {
        request,
        timing,
        from,
        to,
    });
}

/// Circle and abbreviation label for each point, in dataset order.
pub(super) fn push_point_primitives(
    frame: &mut RenderFrame,
    plot: PlotArea,
    dataset: &Dataset,
    positions: &[(f64, f64)],
    hovered: Option<usize>,
    style: PointStyle,
) {
    for (index, (record, &(x, y))) in dataset.records().iter().zip(positions).enumerate() {
        let (cx, cy) = plot.to_canvas(x, y);
        let mut circle = CirclePrimitive::new(cx, cy, style.radius, style.fill);
        if hovered == Some(index) {
            circle = circle.with_stroke(style.hover_stroke_width, style.hover_stroke);
        }
        frame.circles.push(circle);

        if !record.abbr.is_empty() {
            frame.texts.push(TextPrimitive::new(
                record.abbr.clone(),
                cx,
                cy + style.label_offset_y,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Center,
            ));
        }
    }
}
