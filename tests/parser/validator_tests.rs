//! Validation tests.
//!
//! Exact diagnostics for the grammar's failure modes, rendered the way
//! callers see them.

use numberwords_foundation::{Diagnostic, DiagnosticKind};
use numberwords_parser::validate;

fn errors(text: &str) -> String {
    validate(text).to_string()
}

#[test]
fn blank_text_is_invalid() {
    let validation = validate("");
    assert!(!validation.is_valid());
    assert_eq!(validation.to_string(), "Blank text is not valid");
}

#[test]
fn valid_phrases_render_empty() {
    for text in [
        "One",
        "eleven",
        "forty",
        "Fifty seven",
        "One Hundred and Fifty seven",
        "one Hundred thousand million",
        "one Hundred and fifty nine thousand",
    ] {
        assert_eq!(errors(text), "", "{text}");
    }
}

#[test]
fn multiple_digits() {
    assert_eq!(errors("One two"), "Second digit is not valid two");
}

#[test]
fn multiple_teens() {
    assert_eq!(
        errors("Fourteen twelve"),
        "Did not expect the word type of teens or tens in the position of second digit for twelve"
    );
}

#[test]
fn digit_before_tens() {
    assert_eq!(
        errors("seven Fifty"),
        "Did not expect the word type of teens or tens in the position of second digit for fifty"
    );
}

#[test]
fn hundred_without_leading_digit() {
    assert_eq!(
        errors("Hundred and Fifty seven"),
        "Expecting a number word rather than : hundred\nExpecting a number word rather than : and"
    );
}

#[test]
fn hundred_after_two_digit_group() {
    assert_eq!(
        errors("seventy one Hundred thousand million"),
        "The Hundred can only follow a digit word"
    );
}

#[test]
fn hundred_after_teen() {
    assert_eq!(
        errors("seventeen Hundred thousand million"),
        "The Hundred can only follow a digit word"
    );
}

#[test]
fn repeated_and() {
    assert_eq!(
        errors("one Hundred and and fifty nine thousand"),
        "Can not repeat and\nExpecting a number word rather than : and"
    );
}

#[test]
fn trailing_and() {
    assert_eq!(
        errors("one Hundred and fifty nine thousand and"),
        "The last word can not be 'and' most be followed by a number word"
    );
}

#[test]
fn unknown_word_is_a_vocabulary_problem() {
    let validation = validate("twenty zero");
    assert!(validation.diagnostics().has_kind(DiagnosticKind::Vocabulary));
    assert_eq!(
        validation.diagnostics().as_slice()[0],
        Diagnostic::UnknownWord("zero".to_string())
    );
}

#[test]
fn blanks_are_reported_per_piece() {
    let validation = validate("fifty  seven ");
    assert_eq!(
        validation.into_diagnostics().as_slice(),
        &[Diagnostic::BlankItem, Diagnostic::BlankItem]
    );
}

#[test]
fn trailing_dollar_only_is_accepted() {
    assert!(validate("five hundred dollar only").is_valid());
    assert!(validate("twelve only").is_valid());
}

#[test]
fn validation_is_idempotent() {
    let text = "one Hundred and and fifty nine thousand";
    assert_eq!(validate(text), validate(text));
}

#[test]
fn hundred_after_a_second_group() {
    assert_eq!(
        errors("fifty seven five hundred"),
        "The Hundred can only follow a digit word"
    );
    assert_eq!(
        errors("twenty one two hundred thousand"),
        "The Hundred can only follow a digit word"
    );
}

#[test]
fn number_word_after_group_opens_a_new_group() {
    assert_eq!(errors("fifty seven twelve"), "");
}

#[test]
fn unknown_after_group_reports_vocabulary_only() {
    assert_eq!(errors("fifty seven xyz"), "The item: xyz is not valid");
}

#[test]
fn unknown_in_second_position_renders_as_none() {
    assert_eq!(
        errors("fifty zero"),
        "The item: zero is not valid\n\
         Did not expect the word type of None in the position of second digit for zero"
    );
}
