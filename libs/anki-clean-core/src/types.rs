//! Core types for cleaned flashcard exports.

use crate::error::RejectReason;
use serde::Serialize;

/// Minimum number of fields a logical record needs to become an entry.
pub const MIN_RECORD_FIELDS: usize = 6;

/// Minimum number of columns written per output row.
pub const MIN_OUTPUT_COLUMNS: usize = 9;

/// A validated, cleaned flashcard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub identifier: String,
    pub note_type: String,
    pub category: String,
    pub primary_text: String,
    pub secondary_text: String,
    pub media_reference: String,
    /// Fields 7+ passed through untouched.
    pub tail: Vec<String>,
}

impl Entry {
    /// Output columns: newlines flattened to spaces, padded to
    /// [`MIN_OUTPUT_COLUMNS`].
    pub fn to_output_row(&self) -> Vec<String> {
        let mut row: Vec<String> = [
            &self.identifier,
            &self.note_type,
            &self.category,
            &self.primary_text,
            &self.secondary_text,
            &self.media_reference,
        ]
        .into_iter()
        .chain(self.tail.iter())
        .map(|field| field.replace('\n', " "))
        .collect();

        if row.len() < MIN_OUTPUT_COLUMNS {
            row.resize(MIN_OUTPUT_COLUMNS, String::new());
        }
        row
    }
}

/// A discarded candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Physical line where the record started (1-based).
    pub line_number: usize,
    /// Identifier after quote stripping; empty when the record was too short.
    pub identifier: String,
    pub reason: RejectReason,
}

/// Everything one cleaning run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanedExport {
    /// `#` lines from the input, verbatim.
    pub headers: Vec<String>,
    pub entries: Vec<Entry>,
    pub rejected: Vec<Rejection>,
    /// Continuation lines seen before any record started.
    pub orphaned_lines: usize,
}
