// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! The math behind lookup ranking.
//!
//! Every signal is checked independently and the points add up. There is no
//! else-chain: an exact match is also a prefix match and a contains match, so
//! it collects all three bonuses.
//!
//! | Signal   | Condition (either field, case-insensitive) | Points |
//! |----------|--------------------------------------------|--------|
//! | Exact    | field == query                             | 100    |
//! | Prefix   | field starts with query                    | 50     |
//! | Contains | field contains query                       | 10     |
//!
//! # Key Invariant: Signal Dominance
//!
//! ```text
//! exact (160) > prefix only (60) > contains only (10)
//! ```
//!
//! Each bonus is larger than the sum of the ones below it, so a stronger
//! signal can never be outvoted by weaker ones.

use crate::types::TermPair;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Bonus when a field equals the query.
pub const EXACT_SCORE: u32 = 100;

/// Bonus when a field starts with the query.
pub const PREFIX_SCORE: u32 = 50;

/// Bonus when a field contains the query. Always earned by matcher output.
pub const CONTAINS_SCORE: u32 = 10;

/// Relevance of `pair` for a normalized `query`.
///
/// Both fields are considered regardless of the search direction: a pair
/// found through its target text still gets the exact bonus if its source
/// text happens to equal the query.
pub fn relevance_score(pair: &TermPair, query: &str) -> u32 {
    let source = pair.source_text.to_lowercase();
    let target = pair.target_text.to_lowercase();
    let mut score = 0;

    // INVARIANT: SIGNAL_ACCUMULATION
    // Independent ifs, never else-if. Collapsing these into a chain breaks the
    // 160 > 60 > 10 ordering.
    if source == query || target == query {
        score += EXACT_SCORE;
    }
    if source.starts_with(query) || target.starts_with(query) {
        score += PREFIX_SCORE;
    }
    if source.contains(query) || target.contains(query) {
        score += CONTAINS_SCORE;
    }

    score
}
