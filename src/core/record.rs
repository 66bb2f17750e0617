use serde::{Deserialize, Serialize};

use crate::core::Metric;
use crate::error::{ScatterError, ScatterResult};

/// One state's row of survey metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub healthcare: f64,
    pub age: f64,
    pub income: f64,
    pub smokes: f64,
    pub obesity: f64,
}

impl Record {
    #[must_use]
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Poverty => self.poverty,
            Metric::Healthcare => self.healthcare,
            Metric::Age => self.age,
            Metric::Income => self.income,
            Metric::Smokes => self.smokes,
            Metric::Obesity => self.obesity,
        }
    }

    pub fn validate(&self) -> ScatterResult<()> {
        for metric in Metric::ALL {
            let value = self.value(metric);
            if !value.is_finite() || value < 0.0 {
                return Err(ScatterError::InvalidInput(format!(
                    "{}: `{metric}` must be finite and >= 0, got {value}",
                    self.state
                )));
            }
        }
        Ok(())
    }
}

/// Immutable, ordered set of records loaded once per chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset, rejecting records with non-finite or negative metrics.
    pub fn new(records: Vec<Record>) -> ScatterResult<Self> {
        for record in &records {
            record.validate()?;
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn values(&self, metric: Metric) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |record| record.value(metric))
    }
}
