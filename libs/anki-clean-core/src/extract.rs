//! Field content extraction: HTML stripping with media-link preservation.
//!
//! Media references are lifted out of the field before tags are stripped.
//! Only the first `[sound:....mp3]` reference survives cleaning; it is
//! re-attached after the cleaned text with a single space.

use crate::text::{decode_entities, normalize, strip_quote_pair};
use once_cell::sync::Lazy;
use regex::Regex;

static MEDIA_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[sound:[^\]]+\.mp3\]").expect("media reference pattern"));

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("html tag pattern"));

/// First media reference in `s`, verbatim.
pub fn find_media_reference(s: &str) -> Option<&str> {
    MEDIA_REFERENCE.find(s).map(|m| m.as_str())
}

/// Remove every `<...>` span. Tags never nest in exported fields.
pub fn strip_tags(s: &str) -> String {
    HTML_TAG.replace_all(s, "").into_owned()
}

/// Clean one HTML field into display text.
pub fn extract_content(raw: &str) -> String {
    let html = strip_quote_pair(raw);
    let media = find_media_reference(html);

    let without_media = MEDIA_REFERENCE.replace_all(html, " ");
    let text = normalize(&decode_entities(&strip_tags(&without_media)));

    match media {
        Some(link) if text.is_empty() => link.to_string(),
        Some(link) => format!("{} {}", text, link),
        None => text,
    }
}
