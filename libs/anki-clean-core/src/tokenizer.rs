//! Tab tokenizer for one logical record.
//!
//! Quote handling is a plain toggle: every `"` flips between outside and
//! inside, with no notion of escaping. Tabs only split fields while outside.
//! An unbalanced quote therefore swallows every later tab of the record.

/// Quote state of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteState {
    Outside,
    Inside,
}

impl QuoteState {
    pub fn toggle(self) -> Self {
        match self {
            Self::Outside => Self::Inside,
            Self::Inside => Self::Outside,
        }
    }
}

/// Split record text into fields. Quote characters are kept in the fields.
/// Always yields at least one field.
pub fn tokenize(record: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = QuoteState::Outside;

    for ch in record.chars() {
        match (ch, state) {
            ('"', _) => {
                state = state.toggle();
                current.push(ch);
            }
            ('\t', QuoteState::Outside) => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_tabs() {
        assert_eq!(tokenize("a\tb\tc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn trailing_empty_field_is_kept() {
        assert_eq!(tokenize("a\tb\t"), vec!["a", "b", ""]);
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn quoted_tab_is_literal() {
        assert_eq!(tokenize("\"a\tb\"\tc"), vec!["\"a\tb\"", "c"]);
    }

    #[test]
    fn quoted_newline_and_tab_stay_in_field() {
        let record = "id\t\"<div>one\n\ttwo</div>\"\tthree";
        assert_eq!(
            tokenize(record),
            vec!["id", "\"<div>one\n\ttwo</div>\"", "three"]
        );
    }

    #[test]
    fn odd_quote_count_swallows_following_tabs() {
        assert_eq!(tokenize("a\"b\tc\td"), vec!["a\"b\tc\td"]);
        assert_eq!(tokenize("x\t\"\"\"\ty\tz"), vec!["x", "\"\"\"\ty\tz"]);
    }

    #[test]
    fn even_quote_count_restores_splitting() {
        assert_eq!(tokenize("\"\"\ta"), vec!["\"\"", "a"]);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(QuoteState::Outside.toggle(), QuoteState::Inside);
        assert_eq!(QuoteState::Inside.toggle(), QuoteState::Outside);
    }
}
