//! Ranking properties: lossless, sorted, stable, additive.

use super::common::make_numbered_pairs;
use proptest::prelude::*;
use toli::{
    find_matches, normalize, rank, relevance_score, Lookup, SearchDirection, TermPair,
    CONTAINS_SCORE, DISPLAY_LIMIT, EXACT_SCORE, PREFIX_SCORE,
};

fn dictionary_strategy() -> impl Strategy<Value = Vec<TermPair>> {
    let field = || prop::string::string_regex("[ab ]{0,5}").unwrap();
    prop::collection::vec(
        (field(), field()).prop_map(|(s, t)| TermPair::new(s, t)),
        0..40,
    )
}

/// Oracle: the additive score, written out signal by signal.
fn oracle_score(pair: &TermPair, query: &str) -> u32 {
    let fields = [pair.source_text.to_lowercase(), pair.target_text.to_lowercase()];
    let exact = fields.iter().any(|f| f == query);
    let prefix = fields.iter().any(|f| f.starts_with(query));
    let contains = fields.iter().any(|f| f.contains(query));
    u32::from(exact) * EXACT_SCORE + u32::from(prefix) * PREFIX_SCORE + u32::from(contains) * CONTAINS_SCORE
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_score_matches_oracle(dict in dictionary_strategy(), raw in "[ab]{1,3}") {
        let query = normalize(&raw);
        for pair in &dict {
            prop_assert_eq!(relevance_score(pair, &query), oracle_score(pair, &query));
        }
    }

    /// Output length equals input length, scores never increase.
    #[test]
    fn prop_rank_lossless_and_sorted(dict in dictionary_strategy(), raw in "[ab]{1,2}") {
        let query = normalize(&raw);
        let hits = find_matches(&dict, &query, SearchDirection::Both);
        let ranked = rank(&hits, &query);
        prop_assert_eq!(ranked.len(), hits.len());
        for window in ranked.windows(2) {
            prop_assert!(window[0].score >= window[1].score);
        }
    }

    /// Equal scores keep their input order.
    #[test]
    fn prop_rank_stable(dict in dictionary_strategy(), raw in "[ab]{1,2}") {
        let query = normalize(&raw);
        let hits = find_matches(&dict, &query, SearchDirection::Both);
        let ranked = rank(&hits, &query);
        let input_pos = |pair: &TermPair| hits.iter().position(|h| std::ptr::eq(*h, pair)).unwrap();
        for window in ranked.windows(2) {
            if window[0].score == window[1].score {
                prop_assert!(input_pos(window[0].pair) < input_pos(window[1].pair));
            }
        }
    }

    /// The lookup's displayed results are exactly the first 100 of the full ranking.
    #[test]
    fn prop_display_is_prefix_of_ranking(count in 0usize..250) {
        let dict = make_numbered_pairs("part", count);
        let hits = find_matches(&dict, "part", SearchDirection::Both);
        let ranked = rank(&hits, "part");

        let lookup = Lookup::loaded(dict.clone());
        let state = lookup.on_query_changed("part", SearchDirection::Both);
        let shown = count.min(DISPLAY_LIMIT);
        prop_assert_eq!(state.results().len(), shown);
        prop_assert_eq!(state.results(), &ranked[..shown]);
    }
}
