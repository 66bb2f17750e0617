use tracing::debug;

use crate::core::Dataset;
use crate::error::{ScatterError, ScatterResult};

use super::load_dataset_from_reader;

/// Fetches the dataset over HTTP(S) with a blocking client.
pub fn fetch_dataset(url: &str) -> ScatterResult<Dataset> {
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|err| ScatterError::Fetch(format!("{url}: {err}")))?;
    let body = response
        .bytes()
        .map_err(|err| ScatterError::Fetch(format!("{url}: {err}")))?;
    debug!(url, bytes = body.len(), "fetched dataset");

    load_dataset_from_reader(body.as_ref())
}
