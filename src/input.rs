//! CSV reader for partner rate rows.

use anyhow::Result;
use std::fs::File;
use tracing::debug;

use crate::records::RateRecord;

/// Reads all [`RateRecord`] rows from a CSV file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any row fails to
/// deserialize.
pub fn read_rate_records(path: &str) -> Result<Vec<RateRecord>> {
    debug!(path, "Reading rate rows");

    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: RateRecord = result?;
        rows.push(record);
    }

    Ok(rows)
}
