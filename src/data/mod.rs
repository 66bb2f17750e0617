//! Dataset loading.
//!
//! The data file is a header-prefixed CSV with at least the columns
//! `state, abbr, poverty, healthcare, age, income, smokes, obesity`.
//! Other columns are ignored.

mod loader;

#[cfg(feature = "http-source")]
mod fetch;

pub use loader::{DEFAULT_DATA_PATH, REQUIRED_COLUMNS, load_dataset, load_dataset_from_reader};

#[cfg(feature = "http-source")]
pub use fetch::fetch_dataset;
