//! Output module
//!
//! Writes the final collection to two independent formats, JSON and CSV,
//! sharing one timestamp-derived filename prefix so the files of a run can
//! be matched up. Output is only written after the full crawl completes;
//! a failed crawl produces no files.

mod csv_writer;
mod json;

pub use csv_writer::write_csv;
pub use json::write_json;

use crate::store::TitleRecord;
use chrono::{DateTime, Datelike, Local};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Builds the shared filename prefix for one run: `year_month_day_epochMillis`
pub fn run_prefix(now: DateTime<Local>) -> String {
    format!(
        "{}_{}_{}_{}",
        now.year(),
        now.month(),
        now.day(),
        now.timestamp_millis()
    )
}

/// Writes both output files for a completed crawl
///
/// Creates the output directory if needed, then writes `<prefix>.json` and
/// `<prefix>.csv` next to each other.
///
/// # Returns
///
/// The paths of the JSON and CSV files, in that order.
pub fn write_outputs(records: &[TitleRecord], directory: &Path) -> OutputResult<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(directory)?;

    let prefix = run_prefix(Local::now());
    let json_path = directory.join(format!("{}.json", prefix));
    let csv_path = directory.join(format!("{}.csv", prefix));

    write_json(records, &json_path)?;
    write_csv(records, &csv_path)?;

    tracing::info!(
        "Wrote {} records to {} and {}",
        records.len(),
        json_path.display(),
        csv_path.display()
    );

    Ok((json_path, csv_path))
}
