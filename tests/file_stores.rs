use std::fs;

use arspell::{
    AddOutcome, CheckerConfig, FileWordStore, SpellChecker, SpellError, Stats, StoreError,
    WordStore,
};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> CheckerConfig {
    CheckerConfig {
        dictionary: dir.path().join("arabic_words.txt"),
        user_dictionary: dir.path().join("user_dictionary.txt"),
        history: dir.path().join("spelling_history.txt"),
        ..CheckerConfig::default()
    }
}

fn write_reference(config: &CheckerConfig, words: &str) {
    fs::write(&config.dictionary, words).unwrap();
}

#[test]
fn user_dictionary_created_empty_when_missing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    write_reference(&config, "كتاب\n");

    SpellChecker::from_config(&config).unwrap();
    assert_eq!(fs::read_to_string(&config.user_dictionary).unwrap(), "");
}

#[test]
fn added_word_survives_a_new_checker() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    write_reference(&config, "كتاب\nكتب\n");

    let checker = SpellChecker::from_config(&config).unwrap();
    assert_eq!(checker.add_word("جديد").unwrap(), AddOutcome::Added);

    let reopened = SpellChecker::from_config(&config).unwrap();
    let mut stats = Stats::new();
    let report = reopened.check("جديد", &mut stats).unwrap();
    assert!(report.all_correct());
    assert_eq!(
        fs::read_to_string(&config.user_dictionary).unwrap(),
        "جديد\n"
    );
}

#[test]
fn missing_reference_list_degrades_to_unavailable() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let checker = SpellChecker::from_config(&config).unwrap();
    let mut stats = Stats::new();
    match checker.check("كتاب", &mut stats) {
        Err(SpellError::VocabularyUnavailable(StoreError::NotFound { .. })) => {}
        other => panic!("expected unavailable dictionary, got {other:?}"),
    }
    assert!(!checker.check_exists("كتاب"));
    assert_eq!(stats, Stats::default());
}

#[test]
fn history_appends_every_checked_input() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    write_reference(&config, "كتاب\n\n  قلم \n");

    let checker = SpellChecker::from_config(&config).unwrap();
    let mut stats = Stats::new();
    checker.check("كتاب قلم", &mut stats).unwrap();
    checker.check("كتا", &mut stats).unwrap();
    assert!(checker.check("   ", &mut stats).is_err());

    assert_eq!(
        fs::read_to_string(&config.history).unwrap(),
        "كتاب قلم\nكتا\n"
    );
    assert_eq!(stats.total, 3);
    assert_eq!(stats.correct, 2);
    assert_eq!(stats.incorrect, 1);
}

#[test]
fn unwritable_history_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(&dir);
    write_reference(&config, "كتاب\n");
    // a directory cannot be opened for appending
    config.history = dir.path().to_path_buf();

    let checker = SpellChecker::from_config(&config).unwrap();
    let mut stats = Stats::new();
    let report = checker.check("كتاب", &mut stats).unwrap();
    assert!(report.all_correct());
    assert!(matches!(
        report.history_failure,
        Some(SpellError::WriteFailure { .. })
    ));
}

#[test]
fn reference_and_user_lists_merge_in_order() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    write_reference(&config, "ab\nac\n");
    fs::write(&config.user_dictionary, "ad\nab\n").unwrap();

    let checker = SpellChecker::from_config(&config).unwrap();
    let vocabulary = checker.load_vocabulary().unwrap();
    assert_eq!(vocabulary.words(), ["ab", "ac", "ad"]);

    // all three tie against "a"; vocabulary order decides
    let checker = checker.with_limit(3);
    let words: Vec<String> = checker
        .suggestions_for("a")
        .unwrap()
        .into_iter()
        .map(|m| m.word)
        .collect();
    assert_eq!(words, vec!["ab", "ac", "ad"]);
}

#[test]
fn file_store_load_and_append() {
    let dir = TempDir::new().unwrap();
    let store = FileWordStore::new(dir.path().join("words.txt"));
    assert!(matches!(store.load(), Err(StoreError::NotFound { .. })));

    store.append("كتاب").unwrap();
    store.append("قلم").unwrap();
    assert_eq!(store.load().unwrap(), vec!["كتاب", "قلم"]);
    assert!(store.describe().ends_with("words.txt"));
}
