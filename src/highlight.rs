// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! Marking matched substrings for display.
//!
//! The query is a literal, never a pattern: it goes through `regex::escape`
//! before being compiled, so `a.b` only ever marks the three characters
//! `a.b`. Matching is case-insensitive and runs in a single left-to-right
//! pass, marking every non-overlapping occurrence while keeping the original
//! casing of the text.

use regex::{Captures, RegexBuilder};

/// Opening tag used by [`highlight`].
pub const MARK_OPEN: &str = "<mark>";

/// Closing tag used by [`highlight`].
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap every case-insensitive occurrence of `query` in `text` with `<mark>` tags.
///
/// ```
/// assert_eq!(toli::highlight("sain uu?", "uu"), "sain <mark>uu</mark>?");
/// ```
pub fn highlight(text: &str, query: &str) -> String {
    highlight_with(text, query, MARK_OPEN, MARK_CLOSE)
}

/// General form of [`highlight`] with caller-chosen delimiters.
///
/// The terminal renderer passes ANSI escape sequences here instead of HTML.
/// An empty query returns `text` unchanged.
pub fn highlight_with(text: &str, query: &str, open: &str, close: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            // Only reachable when the query blows the compiled size limit.
            tracing::warn!(error = %e, "highlight pattern rejected, rendering plain text");
            return text.to_string();
        }
    };

    pattern
        .replace_all(text, |caps: &Captures<'_>| format!("{}{}{}", open, &caps[0], close))
        .into_owned()
}
