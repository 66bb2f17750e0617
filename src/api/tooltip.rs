use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::{Axis, Metric, Record, format_tick};
use crate::interaction::AxisSelection;

/// One `label: value` row of a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TooltipLine {
    pub metric: Metric,
    pub value: f64,
}

impl TooltipLine {
    #[must_use]
    pub fn text(self) -> String {
        format!(
            "{}: {}",
            self.metric.short_label(),
            format_metric_value(self.metric, self.value)
        )
    }
}

/// Info box for one hovered point: state name plus the plotted metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub title: String,
    pub lines: SmallVec<[TooltipLine; 2]>,
}

impl Tooltip {
    /// Builds the tooltip for `record` under the current selection, X first.
    #[must_use]
    pub fn for_record(record: &Record, selection: AxisSelection) -> Self {
        let lines = [Axis::X, Axis::Y]
            .into_iter()
            .map(|axis| {
                let metric = selection.metric(axis);
                TooltipLine {
                    metric,
                    value: record.value(metric),
                }
            })
            .collect();

        Self {
            title: record.state.clone(),
            lines,
        }
    }

    /// Markup form: one `<div>` per row.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!("<div>{}</div>", escape_html(&self.title));
        for line in &self.lines {
            html.push_str("<div>");
            html.push_str(&escape_html(&line.text()));
            html.push_str("</div>");
        }
        html
    }

    /// All rows in display order, title first.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        std::iter::once(self.title.clone())
            .chain(self.lines.iter().map(|line| line.text()))
            .collect()
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rows().join("\n"))
    }
}

/// Percentages get a `%` suffix, income a `$` prefix with grouping, age is bare.
#[must_use]
pub fn format_metric_value(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Income => format!("${}", format_tick(value, 1.0)),
        _ if metric.is_percentage() => format!("{value}%"),
        _ => format!("{value}"),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
