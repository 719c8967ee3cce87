//! Whitespace and entity normalization for exported field text.

/// Fixed entity table, decoded in this order.
const ENTITIES: [(&str, &str); 5] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
];

/// Decode `&nbsp;`, then collapse whitespace runs to one space and trim.
pub fn normalize(s: &str) -> String {
    collapse_whitespace(&s.replace("&nbsp;", " "))
}

/// Trim and collapse every whitespace run (newlines and tabs included).
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the fixed entity table in order.
pub fn decode_entities(s: &str) -> String {
    ENTITIES
        .iter()
        .fold(s.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}

/// Strip one surrounding pair of double quotes, only if both are present.
pub fn strip_quote_pair(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
