//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests agree on what a "small
//! dictionary" looks like.

#![doc(hidden)]

use crate::types::TermPair;

/// Create a single term pair.
pub fn make_pair(source: &str, target: &str) -> TermPair {
    TermPair::new(source, target)
}

/// Create `count` pairs that all contain `stem` in their source text,
/// numbered so their order is easy to assert on.
pub fn make_numbered_pairs(stem: &str, count: usize) -> Vec<TermPair> {
    (0..count)
        .map(|i| TermPair::new(format!("{} {}", stem, i), format!("item {}", i)))
        .collect()
}

/// A small Mongolian-English parts dictionary in a fixed order.
pub fn sample_dictionary() -> Vec<TermPair> {
    vec![
        make_pair("тосны шүүр", "OIL FILTER"),
        make_pair("агаарын шүүр", "AIR FILTER"),
        make_pair("хөдөлгүүрийн тос", "ENGINE OIL"),
        make_pair("тос", "OIL"),
        make_pair("тоормосны наклад урд", "BRAKE PAD FRONT"),
        make_pair("тоормосны наклад хойд", "BRAKE PAD REAR"),
        make_pair("гэрлийн чийдэн", "HEAD LAMP BULB"),
        make_pair("khair", "love"),
        make_pair("khairkhan", "dear"),
        make_pair("sain uu?", "hello"),
    ]
}
