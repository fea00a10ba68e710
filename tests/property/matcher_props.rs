//! Matcher properties: exhaustive partition and direction algebra.

use proptest::prelude::*;
use toli::{find_matches, matches_direction, normalize, SearchDirection, TermPair};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short mixed-case Latin and Cyrillic text, so substrings collide often.
fn field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB тоТО]{0,6}").unwrap()
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<TermPair>> {
    prop::collection::vec(
        (field_strategy(), field_strategy()).prop_map(|(s, t)| TermPair::new(s, t)),
        0..25,
    )
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abABтоТО]{1,3}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every pair in the result satisfies the predicate, every pair left out fails it.
    #[test]
    fn prop_partition_source(dict in dictionary_strategy(), raw in query_strategy()) {
        let query = normalize(&raw);
        let hits = find_matches(&dict, &query, SearchDirection::SourceOnly);
        for pair in &dict {
            let included = hits.iter().any(|hit| std::ptr::eq(*hit, pair));
            let expected = pair.source_text.to_lowercase().contains(&query);
            prop_assert_eq!(included, expected);
        }
    }

    #[test]
    fn prop_partition_target(dict in dictionary_strategy(), raw in query_strategy()) {
        let query = normalize(&raw);
        let hits = find_matches(&dict, &query, SearchDirection::TargetOnly);
        for pair in &dict {
            let included = hits.iter().any(|hit| std::ptr::eq(*hit, pair));
            let expected = pair.target_text.to_lowercase().contains(&query);
            prop_assert_eq!(included, expected);
        }
    }

    /// `Both` hits exactly the pairs hit by either single direction.
    #[test]
    fn prop_both_is_union(dict in dictionary_strategy(), raw in query_strategy()) {
        let query = normalize(&raw);
        for pair in &dict {
            let either = matches_direction(pair, &query, SearchDirection::SourceOnly)
                || matches_direction(pair, &query, SearchDirection::TargetOnly);
            prop_assert_eq!(matches_direction(pair, &query, SearchDirection::Both), either);
        }
    }

    /// Results are an order-preserving subsequence of the dictionary.
    #[test]
    fn prop_order_preserved(dict in dictionary_strategy(), raw in query_strategy()) {
        let query = normalize(&raw);
        let hits = find_matches(&dict, &query, SearchDirection::Both);
        let positions: Vec<usize> = hits
            .iter()
            .map(|hit| dict.iter().position(|p| std::ptr::eq(p, *hit)).unwrap())
            .collect();
        for window in positions.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
    }

    /// Query case never changes what matches.
    #[test]
    fn prop_case_insensitive(dict in dictionary_strategy(), raw in query_strategy()) {
        let lower = find_matches(&dict, &normalize(&raw.to_lowercase()), SearchDirection::Both);
        let upper = find_matches(&dict, &normalize(&raw.to_uppercase()), SearchDirection::Both);
        prop_assert_eq!(lower, upper);
    }
}
