//! Record boundary detection.
//!
//! A physical line either opens a new logical record or continues the
//! previous one. The default policy treats "identifier characters followed
//! by a tab" as a record start. A continuation line that happens to look
//! like that is misclassified; callers needing stricter rules can plug in
//! their own [`BoundaryPolicy`].

use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_TAB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[A-Za-z0-9,._\-+=\[\]{}|\\:;"'<>?/~`!@#$%^&*()]+\t"#)
        .expect("identifier pattern")
});

/// Decides whether a data line starts a new record.
///
/// Lines handed to a policy are never blank and never start with `#`.
pub trait BoundaryPolicy {
    /// Policy identifier.
    fn name(&self) -> &'static str;

    /// True when `line` opens a new logical record.
    fn starts_record(&self, line: &str) -> bool;
}

/// Default policy: identifier-like prefix terminated by a tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierTab;

impl BoundaryPolicy for IdentifierTab {
    fn name(&self) -> &'static str {
        "identifier_tab"
    }

    fn starts_record(&self, line: &str) -> bool {
        is_new_record(line)
    }
}

/// Default boundary predicate.
pub fn is_new_record(line: &str) -> bool {
    let line = line.strip_prefix('"').unwrap_or(line);
    if line.starts_with('<') {
        return false;
    }
    IDENTIFIER_TAB.is_match(line)
}
