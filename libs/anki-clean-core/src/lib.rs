//! Core library for cleaning tab-delimited flashcard exports.
//!
//! Provides:
//! - Record assembler that joins multi-line HTML records
//! - Pluggable record boundary detection
//! - Quote-aware tab tokenizer
//! - HTML field cleaning with media-link preservation
//! - Tab-delimited and JSON writers

pub mod boundary;
pub mod error;
pub mod export;
pub mod extract;
pub mod parser;
pub mod text;
pub mod tokenizer;
pub mod types;
pub mod writer;

pub use boundary::{is_new_record, BoundaryPolicy, IdentifierTab};
pub use error::{CleanError, RejectReason, RequiredField, Result};
pub use export::{write_json, JsonExport};
pub use extract::extract_content;
pub use parser::{build_entry, parse, parse_reader, Assembler};
pub use text::normalize;
pub use tokenizer::{tokenize, QuoteState};
pub use types::{CleanedExport, Entry, Rejection, MIN_OUTPUT_COLUMNS, MIN_RECORD_FIELDS};
pub use writer::{write_cleaned, REQUIRED_HEADERS};
