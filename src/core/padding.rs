use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// How a scale's domain is widened beyond the data's min and max.
///
/// `low` applies to the minimum and `high` to the maximum, independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaddingPolicy {
    /// Domain is `[min * low, max * high]`.
    Multiplicative { low: f64, high: f64 },
    /// Domain is `[min + low, max + high]`.
    Additive { low: f64, high: f64 },
}

impl PaddingPolicy {
    #[must_use]
    pub const fn multiplicative_x_default() -> Self {
        Self::Multiplicative {
            low: 0.92,
            high: 1.05,
        }
    }

    #[must_use]
    pub const fn multiplicative_y_default() -> Self {
        Self::Multiplicative {
            low: 0.8,
            high: 1.2,
        }
    }

    #[must_use]
    pub const fn additive_x_default() -> Self {
        Self::Additive {
            low: 0.0,
            high: 1.0,
        }
    }

    #[must_use]
    pub const fn additive_y_default() -> Self {
        Self::Additive {
            low: 0.0,
            high: 2.0,
        }
    }

    /// Identity padding: the domain is exactly the data extent.
    #[must_use]
    pub const fn none() -> Self {
        Self::Additive {
            low: 0.0,
            high: 0.0,
        }
    }

    pub fn validate(self) -> ScatterResult<Self> {
        let (low, high) = match self {
            Self::Multiplicative { low, high } | Self::Additive { low, high } => (low, high),
        };
        if !low.is_finite() || !high.is_finite() {
            return Err(ScatterError::InvalidInput(
                "padding factors must be finite".to_owned(),
            ));
        }
        if let Self::Multiplicative { .. } = self {
            if low < 0.0 || high < 0.0 {
                return Err(ScatterError::InvalidInput(
                    "multiplicative padding factors must be >= 0".to_owned(),
                ));
            }
        }
        Ok(self)
    }

    /// Applies the policy to a data extent.
    #[must_use]
    pub fn apply(self, min: f64, max: f64) -> (f64, f64) {
        match self {
            Self::Multiplicative { low, high } => (min * low, max * high),
            Self::Additive { low, high } => (min + low, max + high),
        }
    }
}
