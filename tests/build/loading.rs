//! Tests for dataset loading and writing.

use std::path::Path;

use super::common::{make_pair, sample_dictionary, temp_file, LEGACY_DICTIONARY, SAMPLE_DICTIONARY};
use toli::build::{load_path, write_path, LoadError};
use toli::{Lookup, SearchDirection};

#[test]
fn test_load_sample_dictionary_in_file_order() {
    let pairs = load_path(Path::new(SAMPLE_DICTIONARY)).expect("Failed to load sample dictionary");
    assert_eq!(pairs, sample_dictionary());
}

#[test]
fn test_load_legacy_field_names() {
    let pairs = load_path(Path::new(LEGACY_DICTIONARY)).expect("Failed to load legacy dictionary");
    assert_eq!(pairs.len(), 5);
    assert_eq!(pairs[0], make_pair("тосны шүүр", "OIL FILTERKIT"));
}

#[test]
fn test_malformed_record_fails_whole_load() {
    let file = temp_file(
        r#"[{"sourceText": "тос", "targetText": "OIL"}, {"targetText": "FILTER"}]"#,
        ".json",
    );
    let err = load_path(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)), "unexpected error: {err}");
    assert!(err.to_string().contains("sourceText"));
}

#[test]
fn test_non_array_json_fails() {
    let file = temp_file(r#"{"sourceText": "тос", "targetText": "OIL"}"#, ".json");
    assert!(matches!(load_path(file.path()), Err(LoadError::Json(_))));
}

#[test]
fn test_csv_by_extension() {
    let file = temp_file("Mongolian,English\nтос,OIL\n ,BLANK\nшүүр,FILTER\n", ".csv");
    let pairs = load_path(file.path()).expect("Failed to load CSV");
    assert_eq!(pairs, vec![make_pair("тос", "OIL"), make_pair("шүүр", "FILTER")]);
}

#[test]
fn test_csv_short_row_fails() {
    let file = temp_file("Mongolian,English\nтос\n", ".CSV");
    assert!(matches!(
        load_path(file.path()),
        Err(LoadError::MissingColumn { row: 2 })
    ));
}

#[test]
fn test_write_then_load() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out = dir.path().join("nested").join("dictionary.json");

    write_path(&sample_dictionary(), &out).expect("Failed to write dictionary");
    let reloaded = load_path(&out).expect("Failed to reload dictionary");
    assert_eq!(reloaded, sample_dictionary());
}

#[test]
fn test_loaded_file_drives_lookup() {
    let pairs = load_path(Path::new(SAMPLE_DICTIONARY)).unwrap();
    let mut lookup = Lookup::loading();
    assert!(!lookup.is_loaded());
    lookup.set_pairs(pairs);

    let state = lookup.on_query_changed("тос", SearchDirection::SourceOnly);
    assert_eq!(state.results()[0].pair.source_text, "тос");
    assert_eq!(state.results()[0].score, 160);
}
