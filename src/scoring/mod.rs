// Copyright 2025-present The toli Authors
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how lookup results get their numbers.
//!
//! Three additive signals (exact, prefix, contains) produce a small integer
//! score. The ranker sorts by that score and nothing else, relying on a stable
//! sort to keep ties in dictionary order.

mod core;
pub mod ranking;

pub use self::core::*;
