//! Tokenizer and classifier tests.
//!
//! Tests for converting raw input to classified token streams.

use numberwords_parser::{InputToken, NumberTokenizer, TokenCategory, classify};

#[test]
fn classify_every_category() {
    assert_eq!(classify("one"), TokenCategory::Digit);
    assert_eq!(classify("eleven"), TokenCategory::Teen);
    assert_eq!(classify("ninety"), TokenCategory::Tens);
    assert_eq!(classify("hundred"), TokenCategory::Hundred);
    assert_eq!(classify("thousand"), TokenCategory::Multiplier);
    assert_eq!(classify("and"), TokenCategory::And);
    assert_eq!(classify("dollar"), TokenCategory::Separator);
    assert_eq!(classify("only"), TokenCategory::Only);
    assert_eq!(classify("zero"), TokenCategory::Unknown);
    assert_eq!(classify(""), TokenCategory::None);
}

#[test]
fn category_names_used_in_messages() {
    assert_eq!(TokenCategory::Teen.name(), "teens or tens");
    assert_eq!(TokenCategory::Tens.name(), "teens or tens");
    assert_eq!(TokenCategory::Hundred.to_string(), "Hundred");
}

#[test]
fn tokenize_lowercases_and_classifies() {
    let stream = NumberTokenizer::tokenize("Fifty SEVEN");
    let words: Vec<_> = stream
        .words()
        .map(|w| (w.text.as_str(), w.category, w.value))
        .collect();
    assert_eq!(
        words,
        vec![
            ("fifty", TokenCategory::Tens, 50),
            ("seven", TokenCategory::Digit, 7),
        ]
    );
}

#[test]
fn tokenize_keeps_blank_pieces() {
    let stream = NumberTokenizer::tokenize(" one  two ");
    assert_eq!(stream.len(), 5);
    assert!(matches!(stream.tokens()[0], InputToken::Blank));
    assert!(matches!(stream.tokens()[2], InputToken::Blank));
    assert!(matches!(stream.tokens()[4], InputToken::Blank));
    assert_eq!(stream.words().count(), 2);
}

#[test]
fn tokenize_empty_input() {
    let stream = NumberTokenizer::tokenize("");
    assert!(stream.is_empty_source());
    assert!(stream.is_empty());
}

#[test]
fn positions_index_the_pieces() {
    let stream = NumberTokenizer::tokenize("one  hundred");
    let positions: Vec<_> = stream.words().map(|w| w.position).collect();
    assert_eq!(positions, vec![0, 2]);
}
