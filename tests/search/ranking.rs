//! Ranking: additive scores, descending order, stable ties.

use super::common::{make_numbered_pairs, make_pair, sources};
use toli::{find_matches, rank, relevance_score, SearchDirection, TermPair};

#[test]
fn test_worked_example_khair() {
    let exact = make_pair("khair", "love");
    let prefix = make_pair("khairkhan", "dear");
    assert_eq!(relevance_score(&exact, "khair"), 160);
    assert_eq!(relevance_score(&prefix, "khair"), 60);

    let ranked = rank(&[&prefix, &exact], "khair");
    assert_eq!(sources(&ranked), vec!["khair", "khairkhan"]);
}

#[test]
fn test_target_contains_only_scores_ten() {
    let pair = make_pair("агаарын шүүр", "AIR FILTER");
    assert_eq!(relevance_score(&pair, "filter"), 10);
}

#[test]
fn test_three_bands_in_order() {
    let dict = vec![
        make_pair("engine oil", "хөдөлгүүрийн тос"),
        make_pair("oil filter", "тосны шүүр"),
        make_pair("oil", "тос"),
    ];
    let hits = find_matches(&dict, "oil", SearchDirection::Both);
    let ranked = rank(&hits, "oil");
    let scores: Vec<u32> = ranked.iter().map(|m| m.score).collect();
    assert_eq!(scores, vec![160, 60, 10]);
    assert_eq!(sources(&ranked), vec!["oil", "oil filter", "engine oil"]);
}

#[test]
fn test_equal_scores_keep_dictionary_order() {
    let dict = make_numbered_pairs("наклад", 20);
    let hits = find_matches(&dict, "наклад", SearchDirection::SourceOnly);
    let ranked = rank(&hits, "наклад");

    let expected: Vec<String> = (0..20).map(|i| format!("наклад {}", i)).collect();
    let actual: Vec<String> = ranked.iter().map(|m| m.pair.source_text.clone()).collect();
    assert_eq!(actual, expected);
    assert!(ranked.iter().all(|m| m.score == 60));
}

#[test]
fn test_duplicates_both_ranked() {
    let dict = vec![make_pair("тос", "OIL"), make_pair("тос", "OIL")];
    let hits = find_matches(&dict, "тос", SearchDirection::Both);
    let ranked = rank(&hits, "тос");
    assert_eq!(ranked.len(), 2);
    assert!(std::ptr::eq(ranked[0].pair, &dict[0]));
    assert!(std::ptr::eq(ranked[1].pair, &dict[1]));
}

#[test]
fn test_rank_never_truncates() {
    let dict: Vec<TermPair> = make_numbered_pairs("part", 150);
    let hits = find_matches(&dict, "part", SearchDirection::Both);
    assert_eq!(rank(&hits, "part").len(), 150);
}

#[test]
fn test_repeated_rank_is_deterministic() {
    let dict = make_numbered_pairs("oil", 50);
    let hits = find_matches(&dict, "oil", SearchDirection::Both);
    assert_eq!(rank(&hits, "oil"), rank(&hits, "oil"));
}
