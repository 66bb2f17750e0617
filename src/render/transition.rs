use serde::{Deserialize, Serialize};

/// Default length of an axis-change animation.
pub const DEFAULT_TRANSITION_MS: f64 = 1000.0;

/// Timing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
        }
    }
}

/// Start time and duration of one animation on the chart clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Timing {
    #[must_use]
    pub const fn new(start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Linear progress at `now_ms`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn eased(self, now_ms: f64) -> f64 {
        self.easing.apply(self.progress(now_ms))
    }

    #[must_use]
    pub fn is_finished(self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
