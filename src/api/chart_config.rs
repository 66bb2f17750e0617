use serde::{Deserialize, Serialize};

use crate::core::{Margins, PaddingPolicy, PlotArea, Viewport};
use crate::data::DEFAULT_DATA_PATH;
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::AxisSelection;
use crate::render::{Color, DEFAULT_TRANSITION_MS, Easing};

/// Appearance of data point markers and their abbreviation labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub radius: f64,
    pub fill: Color,
    pub hover_stroke: Color,
    pub hover_stroke_width: f64,
    pub label_font_size_px: f64,
    pub label_color: Color,
    /// Vertical offset of the abbreviation from the circle center.
    pub label_offset_y: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            radius: 15.0,
            fill: Color::PINK.with_alpha(0.5),
            hover_stroke: Color::RED,
            hover_stroke_width: 1.0,
            label_font_size_px: 13.0,
            label_color: Color::BLACK,
            label_offset_y: 5.0,
        }
    }
}

/// Tooltip box displacement from its default spot above the hovered point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub top: f64,
    pub left: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self {
            top: 80.0,
            left: -1.0,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_mount_selector")]
    pub mount_selector: String,
    #[serde(default = "default_data_path")]
    pub data_path: String,
    #[serde(default)]
    pub selection: AxisSelection,
    #[serde(default = "PaddingPolicy::multiplicative_x_default")]
    pub x_padding: PaddingPolicy,
    #[serde(default = "PaddingPolicy::multiplicative_y_default")]
    pub y_padding: PaddingPolicy,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default)]
    pub point_style: PointStyle,
    #[serde(default)]
    pub tooltip_offset: TooltipOffset,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: Margins::default(),
            mount_selector: default_mount_selector(),
            data_path: default_data_path(),
            selection: AxisSelection::default(),
            x_padding: PaddingPolicy::multiplicative_x_default(),
            y_padding: PaddingPolicy::multiplicative_y_default(),
            transition_ms: default_transition_ms(),
            easing: Easing::default(),
            tick_count: default_tick_count(),
            point_style: PointStyle::default(),
            tooltip_offset: TooltipOffset::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport, margins: Margins) -> Self {
        Self {
            viewport,
            margins,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_selection(mut self, selection: AxisSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets domain padding for both axes.
    #[must_use]
    pub fn with_padding(mut self, x_padding: PaddingPolicy, y_padding: PaddingPolicy) -> Self {
        self.x_padding = x_padding;
        self.y_padding = y_padding;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition_ms: f64, easing: Easing) -> Self {
        self.transition_ms = transition_ms;
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_data_path(mut self, data_path: impl Into<String>) -> Self {
        self.data_path = data_path.into();
        self
    }

    #[must_use]
    pub fn with_mount_selector(mut self, selector: impl Into<String>) -> Self {
        self.mount_selector = selector.into();
        self
    }

    #[must_use]
    pub fn with_point_style(mut self, style: PointStyle) -> Self {
        self.point_style = style;
        self
    }

    /// Checks every field and returns the plot area the margins leave.
    pub fn validate(&self) -> ScatterResult<PlotArea> {
        let plot = PlotArea::from_viewport(self.viewport, self.margins)?;
        self.x_padding.validate()?;
        self.y_padding.validate()?;

        if !self.transition_ms.is_finite() || self.transition_ms < 0.0 {
            return Err(ScatterError::InvalidInput(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        if self.tick_count == 0 {
            return Err(ScatterError::InvalidInput(
                "tick count must be > 0".to_owned(),
            ));
        }
        if self.mount_selector.trim().is_empty() {
            return Err(ScatterError::InvalidInput(
                "mount selector must not be empty".to_owned(),
            ));
        }

        let style = self.point_style;
        if !style.radius.is_finite() || style.radius <= 0.0 {
            return Err(ScatterError::InvalidInput(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        if !style.label_font_size_px.is_finite() || style.label_font_size_px <= 0.0 {
            return Err(ScatterError::InvalidInput(
                "point label font size must be finite and > 0".to_owned(),
            ));
        }
        if !style.hover_stroke_width.is_finite() || style.hover_stroke_width <= 0.0 {
            return Err(ScatterError::InvalidInput(
                "hover stroke width must be finite and > 0".to_owned(),
            ));
        }
        style.fill.validate()?;
        style.hover_stroke.validate()?;
        style.label_color.validate()?;

        if !style.label_offset_y.is_finite()
            || !self.tooltip_offset.top.is_finite()
            || !self.tooltip_offset.left.is_finite()
        {
            return Err(ScatterError::InvalidInput(
                "offsets must be finite".to_owned(),
            ));
        }

        Ok(plot)
    }

    pub fn to_json_pretty(&self) -> ScatterResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScatterError::Serialization(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ScatterResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScatterError::Serialization(format!("failed to parse config json: {e}")))
    }
}

fn default_mount_selector() -> String {
    "#scatter".to_owned()
}

fn default_data_path() -> String {
    DEFAULT_DATA_PATH.to_owned()
}

fn default_transition_ms() -> f64 {
    DEFAULT_TRANSITION_MS
}

fn default_tick_count() -> usize {
    10
}
