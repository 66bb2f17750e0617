use tracing::{debug, trace};

use crate::core::Axis;
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::RequestLedger;
use crate::render::Renderer;

use super::animation::{AxisTrack, PointTrack};
use super::ScatterChart;

impl<R: Renderer> ScatterChart<R> {
    /// Chart clock in milliseconds since creation.
    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Advances the chart clock and settles transitions that have run out.
    ///
    /// A finished transition commits its end state only when its request is
    /// still the latest for its axis; superseded ones are dropped.
    pub fn step(&mut self, delta_ms: f64) -> ScatterResult<()> {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return Err(ScatterError::InvalidInput(
                "animation step must be finite and >= 0".to_owned(),
            ));
        }
        self.clock_ms += delta_ms;
        trace!(clock_ms = self.clock_ms, "animation step");
        self.settle(self.clock_ms);
        Ok(())
    }

    /// Jumps to the end of every running transition.
    pub fn finish_animations(&mut self) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let end_ms = [
            layout.x_axis.animation.map(|a| a.timing),
            layout.y_axis.animation.map(|a| a.timing),
            layout.x_points.animation.as_ref().map(|a| a.timing),
            layout.y_points.animation.as_ref().map(|a| a.timing),
        ]
        .into_iter()
        .flatten()
        .map(|timing| timing.start_ms + timing.duration_ms)
        .fold(self.clock_ms, f64::max);

        self.clock_ms = end_ms;
        // Rounding in `start + duration` must not leave a track just short of done.
        self.settle(f64::INFINITY);
    }

    fn settle(&mut self, now_ms: f64) {
        let requests = self.interaction.requests();
        if let Some(layout) = self.layout.as_mut() {
            settle_axis(&mut layout.x_axis, Axis::X, requests, now_ms);
            settle_axis(&mut layout.y_axis, Axis::Y, requests, now_ms);
            settle_points(&mut layout.x_points, Axis::X, requests, now_ms);
            settle_points(&mut layout.y_points, Axis::Y, requests, now_ms);
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.layout.as_ref().is_some_and(|layout| {
            layout.x_axis.animation.is_some()
                || layout.y_axis.animation.is_some()
                || layout.x_points.animation.is_some()
                || layout.y_points.animation.is_some()
        })
    }
}

fn settle_axis(track: &mut AxisTrack, axis: Axis, requests: RequestLedger, now_ms: f64) {
    let Some(animation) = track.animation else {
        return;
    };
    if !animation.timing.is_finished(now_ms) {
        return;
    }

    if requests.is_current(axis, animation.request) {
        track.scale = animation.to;
    } else {
        debug!(
            %axis,
            request = animation.request.get(),
            "discarding superseded axis transition"
        );
    }
    track.animation = None;
}

fn settle_points(track: &mut PointTrack, axis: Axis, requests: RequestLedger, now_ms: f64) {
    let Some(animation) = track.animation.take() else {
        return;
    };
    if !animation.timing.is_finished(now_ms) {
        track.animation = Some(animation);
        return;
    }

    if requests.is_current(axis, animation.request) {
        track.coords = animation.to;
    } else {
        debug!(
            %axis,
            request = animation.request.get(),
            "discarding superseded point transition"
        );
    }
}
