//! One cleaning run: read, assemble, write.

use crate::error::{AppError, Result};
use anki_clean_core::{parse_reader, write_cleaned, write_json, JsonExport};
use chrono::Utc;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Output format of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Json,
}

/// Counts reported after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    pub output: PathBuf,
    pub entries: usize,
    pub headers: usize,
    pub skipped: usize,
    pub orphaned_lines: usize,
}

/// Clean `input` into `output`. Malformed records are skipped; only I/O
/// failures end the run early.
pub fn clean_file(input: &Path, output: &Path, format: OutputFormat) -> Result<CleanSummary> {
    if !input.is_file() {
        return Err(AppError::InputNotFound(input.to_path_buf()));
    }

    tracing::info!(input = %input.display(), "parsing");
    let reader = BufReader::new(File::open(input)?);
    let cleaned = parse_reader(reader)?;

    tracing::info!(output = %output.display(), ?format, "writing");
    let writer = BufWriter::new(File::create(output)?);
    match format {
        OutputFormat::Tsv => write_cleaned(writer, &cleaned.entries)?,
        OutputFormat::Json => {
            let source = input.to_string_lossy();
            write_json(writer, &JsonExport::new(&source, &cleaned, Utc::now()))?
        }
    }

    Ok(CleanSummary {
        output: output.to_path_buf(),
        entries: cleaned.entries.len(),
        headers: cleaned.headers.len(),
        skipped: cleaned.rejected.len(),
        orphaned_lines: cleaned.orphaned_lines,
    })
}
