// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a lookup.
//!
//! A dictionary is nothing more than an ordered `Vec<TermPair>`. There is no
//! index, no uniqueness constraint, and no id: two identical pairs are two
//! independent entries that can both match and both show up in results.
//!
//! # Invariants
//!
//! - **TermPair**: both fields are present. A record missing either one is
//!   rejected by the loader, never patched up at search time.
//!
//! - **ScoredMatch**: `score >= CONTAINS_SCORE`. Everything handed to the ranker
//!   already contains the query, so the contains bonus always fires.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One bilingual entry: a source-language term and its target-language equivalent.
///
/// "Source" and "target" are symmetric labels. Neither side is privileged by
/// matching or scoring; [`SearchDirection`] decides which ones take part.
///
/// The wire names are `sourceText` / `targetText`. Datasets exported by the
/// older spreadsheet tooling use `mongolian` / `english`, which are accepted
/// as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermPair {
    #[serde(alias = "mongolian")]
    pub source_text: String,
    #[serde(alias = "english")]
    pub target_text: String,
}

impl TermPair {
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

/// Which field(s) of a [`TermPair`] the query must match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchDirection {
    SourceOnly,
    TargetOnly,
    #[default]
    Both,
}

impl SearchDirection {
    /// Short lowercase name, the same one [`FromStr`] accepts.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchDirection::SourceOnly => "source",
            SearchDirection::TargetOnly => "target",
            SearchDirection::Both => "both",
        }
    }
}

impl fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A direction name that is none of `source`, `target`, `both`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search direction '{0}' (expected source, target or both)")]
pub struct ParseDirectionError(pub String);

impl FromStr for SearchDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "source" | "src" | "mongolian" => Ok(SearchDirection::SourceOnly),
            "target" | "tgt" | "english" => Ok(SearchDirection::TargetOnly),
            "both" | "all" => Ok(SearchDirection::Both),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// A pair together with its relevance score for one query.
///
/// Borrowed from the dictionary: the collection outlives every search, and a
/// scored match is dropped as soon as the results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch<'a> {
    pub pair: &'a TermPair,
    pub score: u32,
}
