// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory bilingual term lookup.
//!
//! A dictionary is an ordered list of [`TermPair`]s. A query is trimmed and
//! case-folded, matched as a plain substring against one or both sides of
//! every pair, and the hits are scored and stably ranked.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  utils.rs   │────▶│  search/     │────▶│  scoring/    │────▶│  lookup.rs  │
//! │ (normalize) │     │(find_matches)│     │ (rank, 160/  │     │ (states,    │
//! │             │     │              │     │   60/10)     │     │  cap 100)   │
//! └─────────────┘     └──────────────┘     └──────────────┘     └─────────────┘
//!                                                                      │
//!        ┌──────────────────────┐                                      ▼
//!        │  build/ (load, tidy) │──── Vec<TermPair> ────▶ Lookup    highlight.rs
//!        └──────────────────────┘
//! ```
//!
//! Matching and ranking are pure functions over borrowed data. The only
//! state lives in [`Lookup`], which holds the dictionary (or the fact that it
//! has not loaded yet) and turns each query change into a [`SearchState`].
//!
//! # Usage
//!
//! ```
//! use toli::{Lookup, SearchDirection, SearchState, TermPair};
//!
//! let lookup = Lookup::loaded(vec![
//!     TermPair::new("khairkhan", "dear"),
//!     TermPair::new("khair", "love"),
//! ]);
//!
//! let state = lookup.on_query_changed("Khair", SearchDirection::Both);
//! assert_eq!(state.status_line(), "2 results");
//! assert_eq!(state.results()[0].pair.source_text, "khair");
//! assert_eq!(state.results()[0].score, 160);
//! ```

// Module declarations
pub mod build;
mod highlight;
mod lookup;
mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use highlight::{highlight, highlight_with, MARK_CLOSE, MARK_OPEN};
pub use lookup::{Lookup, SearchState, DISPLAY_LIMIT};
pub use scoring::ranking::{compare_matches, rank};
pub use scoring::{relevance_score, CONTAINS_SCORE, EXACT_SCORE, PREFIX_SCORE};
pub use search::{find_matches, matches_direction};
pub use types::{ParseDirectionError, ScoredMatch, SearchDirection, TermPair};
pub use utils::normalize;
