//! Utility functions for string processing.

/// Normalize a raw query for matching: trim surrounding whitespace and lowercase.
///
/// Inner whitespace is kept as typed ("brake  pad" only matches a double
/// space) and diacritics are left alone. Matching is plain substring
/// containment on the case-folded fields.
///
/// An empty result means "no active search".
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
