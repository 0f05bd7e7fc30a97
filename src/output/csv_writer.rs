//! CSV output writer
//!
//! Tabular rendition of the same collection: one row per record, with the
//! genre set flattened into a single comma-joined cell.

use crate::output::OutputResult;
use crate::store::TitleRecord;
use std::path::Path;

/// Writes the record collection to a CSV file with a `title,year,genres` header
pub fn write_csv(records: &[TitleRecord], path: &Path) -> OutputResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["title", "year", "genres"])?;
    for record in records {
        let genres = record.genres.join(",");
        writer.write_record([record.title.as_str(), record.year.as_str(), genres.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
