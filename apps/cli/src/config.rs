//! Environment configuration.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file by [`crate::run`].

pub const DEFAULT_SUFFIX: &str = "-CLEANED";

/// Settings that command-line flags may override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Inserted between the input stem and extension to name the output.
    pub output_suffix: String,
    /// Overwrite an existing output without asking.
    pub assume_yes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_suffix: DEFAULT_SUFFIX.to_string(),
            assume_yes: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_suffix = lookup("ANKI_CLEAN_SUFFIX")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SUFFIX.to_string());
        let assume_yes = lookup("ANKI_CLEAN_ASSUME_YES")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            output_suffix,
            assume_yes,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    )
}
