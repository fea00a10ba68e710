// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! Matching: which pairs does a query hit?
//!
//! A pair matches when the chosen field(s) contain the normalized query as a
//! plain substring of their lowercased text. No tokenization, no word
//! boundaries, no Unicode normalization beyond case folding.
//!
//! The result is an order-preserving subset of the collection. Order matters
//! downstream: the ranker sorts stably, so collection order is the final
//! tiebreaker between equal scores.

use crate::types::{SearchDirection, TermPair};

/// Does `pair` satisfy the containment predicate for `direction`?
///
/// `query` must already be normalized (see [`crate::normalize`]).
pub fn matches_direction(pair: &TermPair, query: &str, direction: SearchDirection) -> bool {
    let source_hit = || pair.source_text.to_lowercase().contains(query);
    let target_hit = || pair.target_text.to_lowercase().contains(query);

    match direction {
        SearchDirection::SourceOnly => source_hit(),
        SearchDirection::TargetOnly => target_hit(),
        SearchDirection::Both => source_hit() || target_hit(),
    }
}

/// Filter `collection` down to the pairs matching `query` under `direction`.
///
/// Pure: same inputs, same output, no allocation beyond the result vector.
/// An empty collection gives an empty result; telling that apart from "no
/// matches" is the caller's job (see [`crate::Lookup`]).
pub fn find_matches<'a>(
    collection: &'a [TermPair],
    query: &str,
    direction: SearchDirection,
) -> Vec<&'a TermPair> {
    collection
        .iter()
        .filter(|pair| matches_direction(pair, query, direction))
        .collect()
}
