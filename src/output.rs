//! Output formatting and persistence for scored rate rows.
//!
//! Supports pretty-printing, JSON serialization, and CSV append.

use anyhow::Result;
use tracing::{debug, info};

use crate::records::ScoredRecord;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Logs a scored row using Rust's debug pretty-print format.
pub fn print_pretty(record: &ScoredRecord) {
    debug!("{:#?}", record);
}

/// Logs a scored row as pretty-printed JSON.
pub fn print_json(record: &ScoredRecord) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

/// Appends a [`ScoredRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &ScoredRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}
