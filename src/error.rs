use std::path::PathBuf;

use thiserror::Error;

pub type ScatterResult<T> = Result<T, ScatterError>;

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("margins leave no plot area: plot width={plot_width}, plot height={plot_height}")]
    InvalidMargins { plot_width: f64, plot_height: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid field: {0}")]
    InvalidField(String),

    #[error("chart has no dataset loaded")]
    NotInitialized,

    #[error("failed to load dataset from `{}`: {source}", path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch dataset: {0}")]
    Fetch(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
