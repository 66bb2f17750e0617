use serde::{Deserialize, Serialize};

use crate::core::ticks::{tick_increment, tick_values};
use crate::error::{ScatterError, ScatterResult};

/// Linear map from a data domain to a pixel range.
///
/// The range may be descending (`range_start > range_end`), which is how the
/// vertical axis puts larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        (domain_start, domain_end): (f64, f64),
        (range_start, range_end): (f64, f64),
    ) -> ScatterResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ScatterError::InvalidInput(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ScatterError::InvalidInput(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to a pixel; values outside the domain extrapolate.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse of [`LinearScale::map`].
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    pub fn domain_to_pixel(self, value: f64) -> ScatterResult<f64> {
        if !value.is_finite() {
            return Err(ScatterError::InvalidInput("value must be finite".to_owned()));
        }
        Ok(self.map(value))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ScatterResult<f64> {
        if !pixel.is_finite() {
            return Err(ScatterError::InvalidInput("pixel must be finite".to_owned()));
        }
        Ok(self.invert(pixel))
    }

    /// Scale whose domain sits `t` of the way from `self` to `target`.
    ///
    /// Used to draw an axis mid-transition. `t` is clamped to `[0, 1]`; at the
    /// ends the exact endpoint scales are returned.
    #[must_use]
    pub fn interpolate(self, target: Self, t: f64) -> Self {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return target;
        }

        let lerp = |a: f64, b: f64| a + (b - a) * t;
        let domain_start = lerp(self.domain_start, target.domain_start);
        let mut domain_end = lerp(self.domain_end, target.domain_end);
        if domain_end == domain_start {
            domain_end = domain_start + f64::EPSILON.max(domain_start.abs() * f64::EPSILON);
        }

        Self {
            domain_start,
            domain_end,
            range_start: lerp(self.range_start, target.range_start),
            range_end: lerp(self.range_end, target.range_end),
        }
    }

    /// Round tick values inside the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        tick_values(self.domain_start, self.domain_end, count)
    }

    /// Distance between consecutive ticks for `count`, used for label precision.
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        let (lo, hi) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        let increment = tick_increment(lo, hi, count);
        if increment < 0.0 {
            -1.0 / increment
        } else {
            increment
        }
    }
}
