use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Full drawing surface in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(960, 500)
    }
}

/// Space reserved around the plot area for axes and axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20.0, 40.0, 100.0, 100.0)
    }
}

/// Inner plot rectangle: the viewport minus margins.
///
/// Point and axis coordinates are computed relative to this area's top-left
/// corner and translated by `(left, top)` when a frame is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> ScatterResult<Self> {
        if !viewport.is_valid() {
            return Err(ScatterError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        for value in [margins.top, margins.right, margins.bottom, margins.left] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScatterError::InvalidInput(
                    "margins must be finite and >= 0".to_owned(),
                ));
            }
        }

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ScatterError::InvalidMargins {
                plot_width: width,
                plot_height: height,
            });
        }

        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }

    /// Pixel range for the horizontal axis (left to right).
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (0.0, self.width)
    }

    /// Pixel range for the vertical axis (bottom to top, so larger values sit higher).
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.height, 0.0)
    }

    #[must_use]
    pub fn to_canvas(self, x: f64, y: f64) -> (f64, f64) {
        (self.left + x, self.top + y)
    }
}
