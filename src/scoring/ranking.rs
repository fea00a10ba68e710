// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matched pairs get sorted.
//!
//! Higher score first. Ties keep the order the matcher produced them in,
//! which is dictionary order. `slice::sort_by` is stable, so this falls out
//! of the sort itself instead of needing an explicit index tiebreaker.
//!
//! The ranker never truncates. Capping the list for display happens in
//! [`crate::Lookup`].

use crate::scoring::relevance_score;
use crate::types::{ScoredMatch, TermPair};
use std::cmp::Ordering;

/// Compare two scored matches for ranking: descending by score.
///
/// Returns `Equal` for equal scores so a stable sort preserves input order.
pub fn compare_matches(a: &ScoredMatch<'_>, b: &ScoredMatch<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Score every match against `query` and sort by descending score.
///
/// Output length always equals input length.
pub fn rank<'a>(matches: &[&'a TermPair], query: &str) -> Vec<ScoredMatch<'a>> {
    let mut scored: Vec<ScoredMatch<'a>> = matches
        .iter()
        .map(|&pair| ScoredMatch {
            pair,
            score: relevance_score(pair, query),
        })
        .collect();

    // INVARIANT: STABLE_TIES
    // Must stay a stable sort. Equal-scored entries may not reorder between
    // renders of the same query.
    scored.sort_by(compare_matches);
    scored
}
