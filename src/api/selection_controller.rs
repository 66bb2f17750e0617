use tracing::{debug, trace};

use crate::core::{Axis, AxisChoice, build_scale};
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::{ClickOutcome, LabelClass};
use crate::render::{Renderer, Timing};

use super::axis_render::render_axis;
use super::label_layout::axis_labels;
use super::point_render::render_points;
use super::{AxisLabel, ChartLayout, ScatterChart};

impl<R: Renderer> ScatterChart<R> {
    /// Handles a click on a label of `axis`'s group carrying `value` as its
    /// data attribute.
    ///
    /// Unknown values, or a metric that belongs to the other axis, are
    /// rejected with [`ScatterError::InvalidField`] and leave every piece of
    /// chart state untouched.
    pub fn click_label(&mut self, axis: Axis, value: &str) -> ScatterResult<ClickOutcome> {
        let choice = AxisChoice::parse(axis, value)?;
        self.select(choice)
    }

    /// Typed form of [`ScatterChart::click_label`].
    ///
    /// Re-selecting the active metric is a no-op. Otherwise the axis' scale
    /// is rebuilt and both the axis and that coordinate of every point start
    /// a transition from what is currently drawn.
    pub fn select(&mut self, choice: AxisChoice) -> ScatterResult<ClickOutcome> {
        let now_ms = self.clock_ms;
        let timing = Timing::new(now_ms, self.config.transition_ms, self.config.easing);
        let axis = choice.axis();
        let metric = choice.metric();
        let (range, padding) = match axis {
            Axis::X => (self.plot.x_range(), self.config.x_padding),
            Axis::Y => (self.plot.y_range(), self.config.y_padding),
        };

        let Some(layout) = self.layout.as_mut() else {
            return Err(ScatterError::NotInitialized);
        };
        if self.interaction.selection().is_selected(choice) {
            trace!(%axis, %metric, "label already active");
            return Ok(ClickOutcome::Unchanged);
        }

        // Build before mutating so a failure leaves the previous state drawn.
        let scale = build_scale(&layout.dataset, metric, range, padding)?;
        let (outcome, request) = self.interaction.on_label_click(choice);
        let Some(request) = request else {
            return Ok(outcome);
        };

        let previous = layout.axis(axis).displayed(now_ms);
        let track = layout.axis_mut(axis);
        let previous_metric = track.metric;
        track.metric = metric;
        render_axis(track, previous, scale, request, timing);

        let ChartLayout {
            dataset,
            x_points,
            y_points,
            ..
        } = layout;
        let points = match axis {
            Axis::X => x_points,
            Axis::Y => y_points,
        };
        render_points(points, dataset, metric, scale, request, timing);

        debug!(
            %axis,
            from = %previous_metric,
            to = %metric,
            request = request.get(),
            "axis selection changed"
        );
        Ok(outcome)
    }

    /// Labels of `axis`'s group with their current classes and positions.
    #[must_use]
    pub fn axis_labels(&self, axis: Axis) -> [AxisLabel; 3] {
        axis_labels(
            self.plot,
            self.config.margins,
            self.interaction.selection(),
            axis,
        )
    }

    /// Class of the label for `metric`'s field name on `axis`.
    pub fn label_class(&self, axis: Axis, value: &str) -> ScatterResult<LabelClass> {
        let metric = AxisChoice::parse(axis, value)?.metric();
        self.axis_labels(axis)
            .into_iter()
            .find(|label| label.metric == metric)
            .map(|label| label.class)
            .ok_or_else(|| ScatterError::InvalidField(format!("no label for `{metric}`")))
    }
}
