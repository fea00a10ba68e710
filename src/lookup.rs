// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! The lookup context: one loaded dictionary, one search at a time.
//!
//! Every query change re-enters the lifecycle from scratch:
//!
//! ```text
//! raw query ──normalize──▶ empty? ──yes──▶ Empty
//!                            │ no
//!                            ▼
//!                   dictionary loaded? ──no──▶ Loading
//!                            │ yes
//!                            ▼
//!                   find_matches ──none──▶ NoMatches
//!                            │
//!                            ▼
//!                   rank ──take 100──▶ HasResults
//! ```
//!
//! There is no memoized re-ranking between keystrokes. The working set is
//! small enough that a full pass per change is cheaper than tracking what
//! changed.

use crate::scoring::ranking::rank;
use crate::search::find_matches;
use crate::types::{ScoredMatch, SearchDirection, TermPair};
use crate::utils::normalize;

/// Maximum number of ranked results handed to the renderer.
pub const DISPLAY_LIMIT: usize = 100;

/// Outcome of one query change, as seen by the renderer.
///
/// `Loading` and `NoMatches` are different states with different messages.
/// Folding one into the other tells users "no results" for a dictionary that
/// simply has not arrived yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState<'a> {
    /// The dictionary is not available yet.
    Loading,
    /// The normalized query is empty: clear whatever was displayed.
    Empty,
    /// Dictionary loaded, query active, nothing matched.
    NoMatches,
    /// At least one match. `results` is the display prefix of the ranking,
    /// `total` counts every match.
    HasResults {
        query: String,
        total: usize,
        results: Vec<ScoredMatch<'a>>,
    },
}

impl<'a> SearchState<'a> {
    /// User-visible status message for this state.
    pub fn status_line(&self) -> String {
        match self {
            SearchState::Loading => "Loading dictionary...".to_string(),
            SearchState::Empty => String::new(),
            SearchState::NoMatches => "No results found".to_string(),
            SearchState::HasResults { total, .. } => {
                let plural = if *total == 1 { "" } else { "s" };
                format!("{} result{}", total, plural)
            }
        }
    }

    /// Displayed results, empty for every state but `HasResults`.
    pub fn results(&self) -> &[ScoredMatch<'a>] {
        match self {
            SearchState::HasResults { results, .. } => results,
            _ => &[],
        }
    }
}

/// Explicit search context: the dictionary, or the fact that it is not there yet.
///
/// The dictionary is read-only once set. Searches borrow it, so results can
/// never outlive it.
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    pairs: Option<Vec<TermPair>>,
}

impl Lookup {
    /// A context whose dictionary has not been loaded yet.
    pub fn loading() -> Self {
        Self { pairs: None }
    }

    /// A context over an already-loaded dictionary.
    pub fn loaded(pairs: Vec<TermPair>) -> Self {
        Self { pairs: Some(pairs) }
    }

    /// Hand over the dictionary once the loader resolves.
    pub fn set_pairs(&mut self, pairs: Vec<TermPair>) {
        tracing::debug!(entries = pairs.len(), "dictionary attached to lookup");
        self.pairs = Some(pairs);
    }

    /// The loaded pairs, or an empty slice while loading.
    pub fn pairs(&self) -> &[TermPair] {
        self.pairs.as_deref().unwrap_or(&[])
    }

    /// True once a non-empty dictionary is attached.
    ///
    /// A loaded-but-empty dictionary counts as not loaded and keeps reporting
    /// [`SearchState::Loading`].
    pub fn is_loaded(&self) -> bool {
        !self.pairs().is_empty()
    }

    /// Run one search with the standard display cap.
    pub fn on_query_changed(&self, raw_query: &str, direction: SearchDirection) -> SearchState<'_> {
        self.on_query_changed_with_limit(raw_query, direction, DISPLAY_LIMIT)
    }

    /// Run one search, keeping at most `limit` results (never more than
    /// [`DISPLAY_LIMIT`]).
    pub fn on_query_changed_with_limit(
        &self,
        raw_query: &str,
        direction: SearchDirection,
        limit: usize,
    ) -> SearchState<'_> {
        let query = normalize(raw_query);
        if query.is_empty() {
            return SearchState::Empty;
        }

        if !self.is_loaded() {
            return SearchState::Loading;
        }

        let matches = find_matches(self.pairs(), &query, direction);
        tracing::debug!(
            query = %query,
            direction = %direction,
            matches = matches.len(),
            "lookup"
        );
        if matches.is_empty() {
            return SearchState::NoMatches;
        }

        let total = matches.len();
        let mut results = rank(&matches, &query);
        results.truncate(limit.min(DISPLAY_LIMIT));

        SearchState::HasResults {
            query,
            total,
            results,
        }
    }
}
