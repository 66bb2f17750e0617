use crate::core::{Axis, LinearScale, PlotArea, format_tick};
use crate::interaction::RequestId;
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, Timing};

use super::animation::{AxisTrack, ScaleAnimation};

const TICK_SIZE_PX: f64 = 6.0;
const TICK_PADDING_PX: f64 = 3.0;
const TICK_FONT_SIZE_PX: f64 = 10.0;
const AXIS_STROKE_WIDTH: f64 = 1.0;
/// Tolerance when deciding whether a tick falls inside the drawn range.
const RANGE_EPSILON_PX: f64 = 1e-6;

/// Starts animating an axis from `previous` to `current`.
///
/// `previous` is the scale drawn at the moment of the change, which is not
/// necessarily the last target when a transition is still running. The
/// committed scale is left alone until the transition settles.
pub(super) fn render_axis(
    track: &mut AxisTrack,
    previous: LinearScale,
    current: LinearScale,
    request: RequestId,
    timing: Timing,
) {
    track.animation = Some(ScaleAnimation {
        request,
        timing,
        from: previous,
        to: current,
    });
}

/// Domain line, tick marks and tick labels for one axis drawn with `scale`.
pub(super) fn push_axis_primitives(
    frame: &mut RenderFrame,
    plot: PlotArea,
    axis: Axis,
    scale: LinearScale,
    tick_count: usize,
) {
    let color = Color::BLACK;
    let (range_start, range_end) = scale.range();
    let (range_lo, range_hi) = if range_start <= range_end {
        (range_start, range_end)
    } else {
        (range_end, range_start)
    };
    let step = scale.tick_step(tick_count);

    match axis {
        Axis::X => {
            let (x1, y) = plot.to_canvas(range_lo, plot.height);
            let (x2, _) = plot.to_canvas(range_hi, plot.height);
            frame
                .lines
                .push(LinePrimitive::new(x1, y, x2, y, AXIS_STROKE_WIDTH, color));

            for value in scale.ticks(tick_count) {
                let px = scale.map(value);
                if px < range_lo - RANGE_EPSILON_PX || px > range_hi + RANGE_EPSILON_PX {
                    continue;
                }
                let (x, y) = plot.to_canvas(px, plot.height);
                frame.lines.push(LinePrimitive::new(
                    x,
                    y,
                    x,
                    y + TICK_SIZE_PX,
                    AXIS_STROKE_WIDTH,
                    color,
                ));
                frame.texts.push(TextPrimitive::new(
                    format_tick(value, step),
                    x,
                    y + TICK_SIZE_PX + TICK_PADDING_PX + TICK_FONT_SIZE_PX * 0.71,
                    TICK_FONT_SIZE_PX,
                    color,
                    TextHAlign::Center,
                ));
            }
        }
        Axis::Y => {
            let (x, y1) = plot.to_canvas(0.0, range_lo);
            let (_, y2) = plot.to_canvas(0.0, range_hi);
            frame
                .lines
                .push(LinePrimitive::new(x, y1, x, y2, AXIS_STROKE_WIDTH, color));

            for value in scale.ticks(tick_count) {
                let py = scale.map(value);
                if py < range_lo - RANGE_EPSILON_PX || py > range_hi + RANGE_EPSILON_PX {
                    continue;
                }
                let (x, y) = plot.to_canvas(0.0, py);
                frame.lines.push(LinePrimitive::new(
                    x - TICK_SIZE_PX,
                    y,
                    x,
                    y,
                    AXIS_STROKE_WIDTH,
                    color,
                ));
                frame.texts.push(TextPrimitive::new(
                    format_tick(value, step),
                    x - TICK_SIZE_PX - TICK_PADDING_PX,
                    y + TICK_FONT_SIZE_PX * 0.32,
                    TICK_FONT_SIZE_PX,
                    color,
                    TextHAlign::Right,
                ));
            }
        }
    }
}
