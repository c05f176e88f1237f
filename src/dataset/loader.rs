//! CSV dataset loading
//!
//! Reads the launch-records CSV once at startup. Column lookup is by header
//! name, so extra columns and arbitrary column order are fine; the four
//! required columns must be present.

use std::path::Path;

use super::error::{LoadError, LoadResult};
use super::types::{Dataset, LaunchRecord};

/// Header of the launch-site column
pub const COL_SITE: &str = "Launch Site";
/// Header of the payload-mass column (kilograms)
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
/// Header of the outcome column (1 = success, 0 = failure)
pub const COL_OUTCOME: &str = "class";
/// Header of the booster-version-category column
pub const COL_BOOSTER: &str = "Booster Version Category";

/// Load a dataset from a CSV file
///
/// Fails if the file is missing, any required column is absent, any row
/// holds an unparseable value, or the file has no data rows.
pub fn load(path: &Path) -> LoadResult<Dataset> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let site_idx = column_index(&headers, COL_SITE)?;
    let payload_idx = column_index(&headers, COL_PAYLOAD)?;
    let outcome_idx = column_index(&headers, COL_OUTCOME)?;
    let booster_idx = column_index(&headers, COL_BOOSTER)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        // Row numbering is 1-based and counts the header row.
        let row = i + 2;
        let record = result?;

        let site = field(&record, site_idx, row, COL_SITE)?;
        let payload_raw = field(&record, payload_idx, row, COL_PAYLOAD)?;
        let outcome_raw = field(&record, outcome_idx, row, COL_OUTCOME)?;
        let booster = field(&record, booster_idx, row, COL_BOOSTER)?;

        let payload_mass: f64 = payload_raw.trim().parse().map_err(|_| LoadError::Malformed {
            row,
            message: format!("invalid payload mass: {:?}", payload_raw),
        })?;

        let outcome: u8 = outcome_raw.trim().parse().map_err(|_| LoadError::Malformed {
            row,
            message: format!("invalid outcome: {:?}", outcome_raw),
        })?;

        records.push(LaunchRecord::new(site, payload_mass, outcome, booster));
    }

    let dataset = Dataset::new(records)?;

    tracing::info!(
        records = dataset.len(),
        sites = dataset.sites().len(),
        payload_min = dataset.payload_min(),
        payload_max = dataset.payload_max(),
        "Dataset loaded"
    );

    Ok(dataset)
}

/// Find a required column in the header row
fn column_index(headers: &csv::StringRecord, name: &str) -> LoadResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}

/// Fetch one field from a row, erroring on short rows
fn field<'a>(
    record: &'a csv::StringRecord,
    idx: usize,
    row: usize,
    name: &str,
) -> LoadResult<&'a str> {
    record.get(idx).ok_or_else(|| LoadError::Malformed {
        row,
        message: format!("missing value for column {:?}", name),
    })
}
