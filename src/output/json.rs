//! JSON output writer
//!
//! One array of records, each with `title`, `year`, and the `genres` list
//! in first-seen order.

use crate::output::OutputResult;
use crate::store::TitleRecord;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes the record collection to a pretty-printed JSON file
pub fn write_json(records: &[TitleRecord], path: &Path) -> OutputResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}
