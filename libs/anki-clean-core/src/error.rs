//! Error types for anki-clean-core.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type alias using CleanError.
pub type Result<T> = std::result::Result<T, CleanError>;

/// Fatal errors for a cleaning run.
///
/// Malformed records are never fatal; they surface as [`RejectReason`]s
/// on the run report instead.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Required entry field that may come out empty after cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Identifier,
    PrimaryText,
    SecondaryText,
    MediaReference,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::PrimaryText => "primary text",
            Self::SecondaryText => "secondary text",
            Self::MediaReference => "media reference",
        }
    }
}

/// Why a candidate record was discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("expected at least 6 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("missing {}", MissingList(.0))]
    MissingFields(Vec<RequiredField>),
}

struct MissingList<'a>(&'a [RequiredField]);

impl fmt::Display for MissingList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field.as_str())?;
        }
        Ok(())
    }
}
