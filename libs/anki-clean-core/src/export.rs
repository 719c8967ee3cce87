//! JSON export of cleaned entries.

use crate::error::Result;
use crate::types::{CleanedExport, Entry, Rejection};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Structured counterpart of the tab-delimited export.
#[derive(Debug, Serialize)]
pub struct JsonExport<'a> {
    pub source: &'a str,
    pub exported_at: DateTime<Utc>,
    pub headers: &'a [String],
    pub entries: &'a [Entry],
    pub rejected: &'a [Rejection],
}

impl<'a> JsonExport<'a> {
    pub fn new(source: &'a str, cleaned: &'a CleanedExport, exported_at: DateTime<Utc>) -> Self {
        Self {
            source,
            exported_at,
            headers: &cleaned.headers,
            entries: &cleaned.entries,
            rejected: &cleaned.rejected,
        }
    }
}

/// Write `export` as pretty-printed JSON.
pub fn write_json<W: Write>(mut writer: W, export: &JsonExport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, export)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
