use crate::core::{LinearScale, Metric};
use crate::interaction::RequestId;
use crate::render::{Timing, lerp};

/// In-flight change of an axis' scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ScaleAnimation {
    pub(super) request: RequestId,
    pub(super) timing: Timing,
    pub(super) from: LinearScale,
    pub(super) to: LinearScale,
}

/// Scale state of one axis: the last committed scale plus any running
/// animation toward a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct AxisTrack {
    pub(super) metric: Metric,
    /// Only replaced when a transition settles under a current request.
    pub(super) scale: LinearScale,
    pub(super) animation: Option<ScaleAnimation>,
}

impl AxisTrack {
    pub(super) fn settled(metric: Metric, scale: LinearScale) -> Self {
        Self {
            metric,
            scale,
            animation: None,
        }
    }

    /// Scale the axis is heading to.
    pub(super) fn target(&self) -> LinearScale {
        self.animation.map_or(self.scale, |animation| animation.to)
    }

    /// Scale as drawn at `now_ms`.
    pub(super) fn displayed(&self, now_ms: f64) -> LinearScale {
        match self.animation {
            Some(animation) => animation
                .from
                .interpolate(animation.to, animation.timing.eased(now_ms)),
            None => self.scale,
        }
    }
}

/// In-flight move of every point's coordinate on one axis.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CoordAnimation {
    pub(super) request: RequestId,
    pub(super) timing: Timing,
    pub(super) from: Vec<f64>,
    pub(super) to: Vec<f64>,
}

/// Per-point coordinates on one axis, indexed like the dataset.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PointTrack {
    /// Last committed coordinates.
    pub(super) coords: Vec<f64>,
    pub(super) animation: Option<CoordAnimation>,
}

impl PointTrack {
    pub(super) fn settled(coords: Vec<f64>) -> Self {
        Self {
            coords,
            animation: None,
        }
    }

    pub(super) fn displayed_at(&self, index: usize, now_ms: f64) -> Option<f64> {
        match &self.animation {
            Some(animation) => {
                let t = animation.timing.eased(now_ms);
                let from = animation.from.get(index)?;
                let to = animation.to.get(index)?;
                Some(lerp(*from, *to, t))
            }
            None => self.coords.get(index).copied(),
        }
    }

    pub(super) fn displayed(&self, now_ms: f64) -> Vec<f64> {
        (0..self.coords.len())
            .filter_map(|index| self.displayed_at(index, now_ms))
            .collect()
    }
}
