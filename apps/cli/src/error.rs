//! Error handling for the command-line front-end.

use std::path::PathBuf;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Clean error: {0}")]
    Core(#[from] anki_clean_core::CleanError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_input_not_found() {
        let error = AppError::InputNotFound(PathBuf::from("deck.txt"));
        assert_eq!(error.to_string(), "Input file not found: deck.txt");
    }

    #[test]
    fn test_error_display_io() {
        let error = AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(error.to_string(), "IO error: disk full");
    }

    #[test]
    fn test_core_error_converts() {
        let core = anki_clean_core::CleanError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let error: AppError = core.into();
        assert_eq!(error.to_string(), "Clean error: io error: denied");
    }
}
