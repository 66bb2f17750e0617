use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::{Dataset, Record};
use crate::error::{ScatterError, ScatterResult};

pub const DEFAULT_DATA_PATH: &str = "assets/data/data.csv";

pub const REQUIRED_COLUMNS: [&str; 8] = [
    "state",
    "abbr",
    "poverty",
    "healthcare",
    "age",
    "income",
    "smokes",
    "obesity",
];

/// Reads and validates the dataset stored at `path`.
pub fn load_dataset(path: impl AsRef<Path>) -> ScatterResult<Dataset> {
    let path = path.as_ref();
    let reader = csv_reader_builder()
        .from_path(path)
        .map_err(|source| ScatterError::DataLoad {
            path: path.to_path_buf(),
            source,
        })?;

    let dataset = read_records(reader).map_err(|err| match err {
        ScatterError::Parse(source) => ScatterError::DataLoad {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    if dataset.is_empty() {
        warn!(path = %path.display(), "dataset has no records");
    }
    debug!(path = %path.display(), records = dataset.len(), "loaded dataset");
    Ok(dataset)
}

/// Parses a dataset from any byte source, e.g. an HTTP body or an in-memory fixture.
pub fn load_dataset_from_reader<R: Read>(source: R) -> ScatterResult<Dataset> {
    let dataset = read_records(csv_reader_builder().from_reader(source))?;
    debug!(records = dataset.len(), "parsed dataset");
    Ok(dataset)
}

fn csv_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> ScatterResult<Dataset> {
    let headers = reader.headers()?;
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(ScatterError::InvalidInput(format!(
            "data header is missing column `{missing}`"
        )));
    }

    let records = reader
        .deserialize::<Record>()
        .collect::<Result<Vec<_>, _>>()?;
    Dataset::new(records)
}
