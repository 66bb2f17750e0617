use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::{Dataset, LinearScale, Metric, PaddingPolicy};
use crate::error::{ScatterError, ScatterResult};

/// Half-width used when every record has the same value for a metric.
const FLAT_DOMAIN_HALF_SPAN: f64 = 0.5;

/// Builds the scale for `metric` over `dataset`, mapped onto `range`.
///
/// The domain is the metric's extent with `padding` applied. A flat extent is
/// widened by [`FLAT_DOMAIN_HALF_SPAN`] on each side so the scale stays
/// invertible.
pub fn build_scale(
    dataset: &Dataset,
    metric: Metric,
    range: (f64, f64),
    padding: PaddingPolicy,
) -> ScatterResult<LinearScale> {
    if dataset.is_empty() {
        return Err(ScatterError::InvalidInput(format!(
            "cannot build `{metric}` scale from an empty dataset"
        )));
    }
    let padding = padding.validate()?;

    let (min, max) = metric_extent(dataset, metric)?;
    let (mut domain_start, mut domain_end) = padding.apply(min, max);
    if domain_start == domain_end {
        domain_start -= FLAT_DOMAIN_HALF_SPAN;
        domain_end += FLAT_DOMAIN_HALF_SPAN;
    }

    trace!(
        %metric,
        min,
        max,
        domain_start,
        domain_end,
        "build scale"
    );
    LinearScale::new((domain_start, domain_end), range)
}

/// Minimum and maximum of `metric` across the dataset.
pub fn metric_extent(dataset: &Dataset, metric: Metric) -> ScatterResult<(f64, f64)> {
    let min = dataset.values(metric).map(OrderedFloat).min();
    let max = dataset.values(metric).map(OrderedFloat).max();
    match (min, max) {
        (Some(min), Some(max)) if min.0.is_finite() && max.0.is_finite() => Ok((min.0, max.0)),
        (Some(_), Some(_)) => Err(ScatterError::InvalidInput(format!(
            "`{metric}` extent is not finite"
        ))),
        _ => Err(ScatterError::InvalidInput(format!(
            "`{metric}` has no values"
        ))),
    }
}
