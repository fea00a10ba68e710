//! Tests for the dataset cleanup pipeline.

use std::path::Path;

use super::common::{make_pair, LEGACY_DICTIONARY};
use toli::build::{load_path, tidy, TidyReport};

#[test]
fn test_tidy_legacy_dictionary() {
    let pairs = load_path(Path::new(LEGACY_DICTIONARY)).unwrap();
    let report = tidy(pairs);

    assert_eq!(
        report.pairs,
        vec![
            make_pair("тосны шүүр", "OIL FILTER"),
            make_pair("хөдөлгүүрийн тос", "ENGINE OIL"),
            make_pair("тоормосны наклад", "BRAKE PAD FRONT"),
        ]
    );
    assert_eq!(report.dropped_duplicate, 1);
    assert_eq!(report.dropped_invalid, 1);
    assert_eq!(report.expanded, 1);
}

#[test]
fn test_tidy_keeps_first_duplicate() {
    let report = tidy(vec![
        make_pair("Тос", "Oil"),
        make_pair(" тос ", "OIL "),
    ]);
    assert_eq!(report.pairs, vec![make_pair("Тос", "Oil")]);
    assert_eq!(report.dropped_duplicate, 1);
}

#[test]
fn test_tidy_empty_input() {
    assert_eq!(tidy(Vec::new()), TidyReport::default());
}

#[test]
fn test_tidy_is_idempotent() {
    let once = tidy(load_path(Path::new(LEGACY_DICTIONARY)).unwrap());
    let twice = tidy(once.pairs.clone());
    assert_eq!(twice.pairs, once.pairs);
    assert_eq!(twice.rewritten, 0);
    assert_eq!(twice.expanded, 0);
}
