use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Axis, Viewport};
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::{AxisSelection, LabelClass};
use crate::render::Renderer;

use super::ScatterChart;

/// Drawn position of one point in plot-area pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub abbr: String,
    pub x: f64,
    pub y: f64,
}

/// Deterministic view of chart state, for regression tests and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub clock_ms: f64,
    pub selection: AxisSelection,
    pub x_domain: Option<(f64, f64)>,
    pub y_domain: Option<(f64, f64)>,
    pub points: Vec<PointSnapshot>,
    /// Label classes keyed by field name, x group first, in drawing order.
    pub label_classes: IndexMap<String, LabelClass>,
    pub hovered: Option<usize>,
    pub animating: bool,
}

impl<R: Renderer> ScatterChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let points = match self.layout.as_ref() {
            Some(layout) => layout
                .dataset
                .records()
                .iter()
                .zip(self.point_positions())
                .map(|(record, (x, y))| PointSnapshot {
                    abbr: record.abbr.clone(),
                    x,
                    y,
                })
                .collect(),
            None => Vec::new(),
        };

        let label_classes = [Axis::X, Axis::Y]
            .into_iter()
            .flat_map(|axis| self.axis_labels(axis))
            .map(|label| (label.metric.field_name().to_owned(), label.class))
            .collect();

        ChartSnapshot {
            viewport: self.config.viewport,
            clock_ms: self.clock_ms,
            selection: self.interaction.selection(),
            x_domain: self.displayed_scale(Axis::X).map(|scale| scale.domain()),
            y_domain: self.displayed_scale(Axis::Y).map(|scale| scale.domain()),
            points,
            label_classes,
            hovered: self.interaction.hovered(),
            animating: self.is_animating(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ScatterResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ScatterError::Serialization(format!("failed to serialize snapshot: {e}")))
    }
}

impl ChartSnapshot {
    pub fn from_json_str(input: &str) -> ScatterResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScatterError::Serialization(format!("failed to parse snapshot json: {e}")))
    }
}
