//! Vocabulary tests.
//!
//! Tests for the fixed word tables.

use numberwords_parser::Vocabulary;
use numberwords_parser::vocabulary::{DIGIT_WORDS, MULTIPLIER_WORDS, TEEN_WORDS, TENS_WORDS};

#[test]
fn tables_have_expected_sizes() {
    assert_eq!(DIGIT_WORDS.len(), 9);
    assert_eq!(TEEN_WORDS.len(), 9);
    assert_eq!(TENS_WORDS.len(), 9);
    assert_eq!(MULTIPLIER_WORDS.len(), 3);
}

#[test]
fn numeric_tables_are_disjoint() {
    let vocab = Vocabulary::standard();
    for (word, _) in DIGIT_WORDS {
        assert!(vocab.teen(word).is_none());
        assert!(vocab.tens(word).is_none());
        assert!(vocab.multiplier(word).is_none());
    }
    for (word, _) in TEEN_WORDS {
        assert!(vocab.tens(word).is_none());
    }
}

#[test]
fn lookups() {
    let vocab = Vocabulary::standard();
    assert_eq!(vocab.digit("seven"), Some(7));
    assert_eq!(vocab.teen("nineteen"), Some(19));
    assert_eq!(vocab.tens("ten"), Some(10));
    assert_eq!(vocab.multiplier("million"), Some(1_000_000));
    assert_eq!(vocab.group_value("forty"), Some(40));
    assert!(vocab.is_filler("dollar"));
    assert!(vocab.digit("zero").is_none());
}

#[test]
fn ten_is_a_tens_word() {
    let vocab = Vocabulary::standard();
    assert!(vocab.teen("ten").is_none());
    assert_eq!(vocab.tens("ten"), Some(10));
}

#[test]
fn words_are_sorted_and_unique() {
    let words = Vocabulary::standard().words();
    let mut sorted = words.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(words, sorted);
    assert!(words.contains(&"only"));
    assert!(words.contains(&"and"));
}
