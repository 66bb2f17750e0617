use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Numeric column of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Poverty,
    Healthcare,
    Age,
    Income,
    Smokes,
    Obesity,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Poverty,
        Metric::Healthcare,
        Metric::Age,
        Metric::Income,
        Metric::Smokes,
        Metric::Obesity,
    ];

    /// Column name in the data file and value of the label's data attribute.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Poverty => "poverty",
            Self::Healthcare => "healthcare",
            Self::Age => "age",
            Self::Income => "income",
            Self::Smokes => "smokes",
            Self::Obesity => "obesity",
        }
    }

    /// Short name shown in tooltips.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Poverty => "Poverty",
            Self::Healthcare => "Healthcare",
            Self::Age => "Age",
            Self::Income => "Income",
            Self::Smokes => "Smokes",
            Self::Obesity => "Obesity",
        }
    }

    /// Clickable axis label text.
    #[must_use]
    pub const fn axis_title(self) -> &'static str {
        match self {
            Self::Poverty => "In Poverty (%)",
            Self::Healthcare => "Lacks Healthcare (%)",
            Self::Age => "Age (Median)",
            Self::Income => "Household Income (Median)",
            Self::Smokes => "Smokes (%)",
            Self::Obesity => "Obese (%)",
        }
    }

    #[must_use]
    pub const fn is_percentage(self) -> bool {
        matches!(
            self,
            Self::Poverty | Self::Healthcare | Self::Smokes | Self::Obesity
        )
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Poverty | Self::Age | Self::Income => Axis::X,
            Self::Healthcare | Self::Smokes | Self::Obesity => Axis::Y,
        }
    }

    /// Label group order for one axis, top to bottom as drawn.
    #[must_use]
    pub const fn for_axis(axis: Axis) -> [Metric; 3] {
        match axis {
            Axis::X => [Metric::Poverty, Metric::Age, Metric::Income],
            Axis::Y => [Metric::Healthcare, Metric::Smokes, Metric::Obesity],
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Metric {
    type Err = ScatterError;

    fn from_str(value: &str) -> ScatterResult<Self> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.field_name() == value)
            .ok_or_else(|| ScatterError::InvalidField(format!("unknown metric `{value}`")))
    }
}

/// Metric selectable on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum XMetric {
    #[default]
    Poverty,
    Age,
    Income,
}

/// Metric selectable on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum YMetric {
    #[default]
    Healthcare,
    Smokes,
    Obesity,
}

impl From<XMetric> for Metric {
    fn from(value: XMetric) -> Self {
        match value {
            XMetric::Poverty => Metric::Poverty,
            XMetric::Age => Metric::Age,
            XMetric::Income => Metric::Income,
        }
    }
}

impl From<YMetric> for Metric {
    fn from(value: YMetric) -> Self {
        match value {
            YMetric::Healthcare => Metric::Healthcare,
            YMetric::Smokes => Metric::Smokes,
            YMetric::Obesity => Metric::Obesity,
        }
    }
}

impl TryFrom<Metric> for XMetric {
    type Error = ScatterError;

    fn try_from(value: Metric) -> ScatterResult<Self> {
        match value {
            Metric::Poverty => Ok(XMetric::Poverty),
            Metric::Age => Ok(XMetric::Age),
            Metric::Income => Ok(XMetric::Income),
            other => Err(ScatterError::InvalidField(format!(
                "`{other}` is not an x-axis metric"
            ))),
        }
    }
}

impl TryFrom<Metric> for YMetric {
    type Error = ScatterError;

    fn try_from(value: Metric) -> ScatterResult<Self> {
        match value {
            Metric::Healthcare => Ok(YMetric::Healthcare),
            Metric::Smokes => Ok(YMetric::Smokes),
            Metric::Obesity => Ok(YMetric::Obesity),
            other => Err(ScatterError::InvalidField(format!(
                "`{other}` is not a y-axis metric"
            ))),
        }
    }
}

/// A metric paired with the axis it is selected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisChoice {
    X(XMetric),
    Y(YMetric),
}

impl AxisChoice {
    /// Parses the data attribute of a label that belongs to `axis`'s group.
    pub fn parse(axis: Axis, value: &str) -> ScatterResult<Self> {
        let metric: Metric = value.trim().parse()?;
        match axis {
            Axis::X => XMetric::try_from(metric).map(Self::X),
            Axis::Y => YMetric::try_from(metric).map(Self::Y),
        }
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::X(_) => Axis::X,
            Self::Y(_) => Axis::Y,
        }
    }

    #[must_use]
    pub fn metric(self) -> Metric {
        match self {
            Self::X(metric) => metric.into(),
            Self::Y(metric) => metric.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_metric_round_trips_through_its_field_name() {
        for metric in Metric::ALL {
            let parsed: Metric = metric.field_name().parse().expect("known field");
            assert_eq!(parsed, metric);
        }
    }

    #[test]
    fn axis_groups_partition_metrics() {
        for axis in [Axis::X, Axis::Y] {
            for metric in Metric::for_axis(axis) {
                assert_eq!(metric.axis(), axis);
            }
        }
    }

    #[test]
    fn choice_rejects_metric_from_other_axis() {
        assert!(matches!(
            AxisChoice::parse(Axis::X, "smokes"),
            Err(ScatterError::InvalidField(_))
        ));
        assert_eq!(
            AxisChoice::parse(Axis::Y, "smokes").expect("y metric"),
            AxisChoice::Y(YMetric::Smokes)
        );
    }
}
