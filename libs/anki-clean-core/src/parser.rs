//! Record assembler for tab-delimited flashcard exports.
//!
//! # Format
//! ```text
//! #separator:tab
//! #html:true
//! AbC123	Basic	Croatian	<td>Pas</td>	<td>Dog</td>	[sound:dog.mp3]	tag1
//! Xy9	Basic	Croatian	"<div>Mačka
//! <br>continued</div>"	Cat	[sound:cat.mp3]
//! ```
//!
//! Lines starting with `#` are headers. A record may span several physical
//! lines; the [`BoundaryPolicy`] decides where a new one begins.

use crate::boundary::{BoundaryPolicy, IdentifierTab};
use crate::error::{RejectReason, RequiredField, Result};
use crate::extract::{extract_content, find_media_reference};
use crate::text::strip_quote_pair;
use crate::tokenizer::tokenize;
use crate::types::{CleanedExport, Entry, Rejection, MIN_RECORD_FIELDS};
use std::io::BufRead;

const BOM: char = '\u{feff}';

/// Parse a whole export held in memory.
pub fn parse(content: &str) -> CleanedExport {
    let mut assembler = Assembler::new();
    for line in content.lines() {
        assembler.push_line(line);
    }
    assembler.finish()
}

/// Parse an export from a reader, one line at a time.
///
/// Lines that are not valid UTF-8 are decoded lossily; only read failures
/// abort the run.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<CleanedExport> {
    let mut assembler = Assembler::new();
    let mut buf = Vec::new();
    let mut warned = false;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        match std::str::from_utf8(&buf) {
            Ok(line) => assembler.push_line(line),
            Err(_) => {
                if !warned {
                    tracing::warn!(
                        line = assembler.line_number + 1,
                        "input is not valid UTF-8, decoding lossily"
                    );
                    warned = true;
                }
                assembler.push_line(&String::from_utf8_lossy(&buf));
            }
        }
    }

    Ok(assembler.finish())
}

#[derive(Debug)]
enum State {
    NoActiveRecord,
    Accumulating { start_line: usize, text: String },
}

/// Line-by-line record assembler. One instance per input.
pub struct Assembler<P: BoundaryPolicy = IdentifierTab> {
    policy: P,
    state: State,
    line_number: usize,
    output: CleanedExport,
}

impl Assembler<IdentifierTab> {
    pub fn new() -> Self {
        Self::with_policy(IdentifierTab)
    }
}

impl Default for Assembler<IdentifierTab> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: BoundaryPolicy> Assembler<P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            policy,
            state: State::NoActiveRecord,
            line_number: 0,
            output: CleanedExport::default(),
        }
    }

    /// Feed one physical line, without its line terminator.
    pub fn push_line(&mut self, line: &str) {
        self.line_number += 1;
        let line = if self.line_number == 1 {
            line.strip_prefix(BOM).unwrap_or(line)
        } else {
            line
        };

        if line.starts_with('#') {
            self.output.headers.push(line.to_string());
            return;
        }
        if line.trim().is_empty() {
            return;
        }

        if self.policy.starts_record(line) {
            self.flush();
            self.state = State::Accumulating {
                start_line: self.line_number,
                text: line.to_string(),
            };
            return;
        }

        match &mut self.state {
            State::Accumulating { text, .. } => {
                text.push('\n');
                text.push_str(line);
            }
            State::NoActiveRecord => {
                tracing::debug!(
                    line = self.line_number,
                    policy = self.policy.name(),
                    "dropping continuation line with no open record"
                );
                self.output.orphaned_lines += 1;
            }
        }
    }

    /// Finalize the open record, if any, and return the run's output.
    pub fn finish(mut self) -> CleanedExport {
        self.flush();
        self.output
    }

    fn flush(&mut self) {
        let State::Accumulating { start_line, text } =
            std::mem::replace(&mut self.state, State::NoActiveRecord)
        else {
            return;
        };

        match build_entry(&text) {
            Ok(entry) => self.output.entries.push(entry),
            Err((identifier, reason)) => {
                tracing::warn!(
                    line = start_line,
                    identifier = %identifier,
                    "skipping record: {}",
                    reason
                );
                self.output.rejected.push(Rejection {
                    line_number: start_line,
                    identifier,
                    reason,
                });
            }
        }
    }
}

/// Tokenize and clean one logical record.
///
/// On failure returns the identifier (possibly empty) with the reason.
pub fn build_entry(record: &str) -> std::result::Result<Entry, (String, RejectReason)> {
    let fields = tokenize(record);
    let identifier = strip_quote_pair(&fields[0]).to_string();

    if fields.len() < MIN_RECORD_FIELDS {
        return Err((
            identifier,
            RejectReason::TooFewFields {
                found: fields.len(),
            },
        ));
    }

    let primary_text = extract_content(&fields[3]);
    let secondary_text = extract_content(&fields[4]);
    let media_reference = find_media_reference(&fields[5])
        .unwrap_or_default()
        .to_string();

    let missing: Vec<RequiredField> = [
        (RequiredField::Identifier, &identifier),
        (RequiredField::PrimaryText, &primary_text),
        (RequiredField::SecondaryText, &secondary_text),
        (RequiredField::MediaReference, &media_reference),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err((identifier, RejectReason::MissingFields(missing)));
    }

    Ok(Entry {
        identifier,
        note_type: strip_quote_pair(&fields[1]).to_string(),
        category: strip_quote_pair(&fields[2]).to_string(),
        primary_text,
        secondary_text,
        media_reference,
        tail: fields[MIN_RECORD_FIELDS..].to_vec(),
    })
}
