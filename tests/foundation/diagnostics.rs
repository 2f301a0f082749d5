//! Integration tests for Diagnostic types
//!
//! Tests message text, taxonomy and collection behaviour.

use numberwords_foundation::{Diagnostic, DiagnosticKind, Diagnostics};

// =============================================================================
// Messages
// =============================================================================

#[test]
fn messages_are_literal() {
    let cases = [
        (Diagnostic::BlankText, "Blank text is not valid"),
        (Diagnostic::BlankItem, "Blank items are not valid"),
        (
            Diagnostic::UnknownWord("zero".to_string()),
            "The item: zero is not valid",
        ),
        (
            Diagnostic::ExpectedNumberWord("hundred".to_string()),
            "Expecting a number word rather than : hundred",
        ),
        (
            Diagnostic::InvalidSecondDigit("two".to_string()),
            "Second digit is not valid two",
        ),
        (
            Diagnostic::MissingAnd("five".to_string()),
            "A multiplier must be followed by the word 'And' rather than five",
        ),
        (
            Diagnostic::HundredWithoutDigit,
            "The Hundred can only follow a digit word",
        ),
        (Diagnostic::RepeatedAnd, "Can not repeat and"),
        (
            Diagnostic::TrailingAnd,
            "The last word can not be 'and' most be followed by a number word",
        ),
    ];

    for (diagnostic, message) in cases {
        assert_eq!(diagnostic.to_string(), message);
    }
}

#[test]
fn unexpected_second_word_names_category() {
    let diagnostic = Diagnostic::UnexpectedSecondWord {
        category: "teens or tens",
        word: "fifty".to_string(),
    };
    assert_eq!(
        diagnostic.to_string(),
        "Did not expect the word type of teens or tens in the position of second digit for fifty"
    );
}

// =============================================================================
// Taxonomy
// =============================================================================

#[test]
fn kinds_cover_every_family() {
    assert_eq!(
        Diagnostic::UnknownWord(String::new()).kind(),
        DiagnosticKind::Vocabulary
    );
    assert_eq!(
        Diagnostic::InvalidSecondDigit(String::new()).kind(),
        DiagnosticKind::GrammarPosition
    );
    assert_eq!(
        Diagnostic::HundredWithoutDigit.kind(),
        DiagnosticKind::SemanticConstraint
    );
    assert_eq!(Diagnostic::BlankItem.kind(), DiagnosticKind::Structural);
    assert_eq!(Diagnostic::Overflow.kind(), DiagnosticKind::Overflow);
}

// =============================================================================
// Collection
// =============================================================================

#[test]
fn diagnostics_keep_order_and_join_with_newlines() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(Diagnostic::RepeatedAnd);
    diagnostics.push(Diagnostic::ExpectedNumberWord("and".to_string()));

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics.to_string(),
        "Can not repeat and\nExpecting a number word rather than : and"
    );
    assert!(diagnostics.has_kind(DiagnosticKind::GrammarPosition));
    assert!(!diagnostics.has_kind(DiagnosticKind::Vocabulary));
}

#[test]
fn empty_diagnostics_render_empty() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());
    assert_eq!(diagnostics.to_string(), "");
}

#[test]
fn diagnostics_collect_from_iterator() {
    let diagnostics: Diagnostics = [Diagnostic::BlankText, Diagnostic::BlankItem]
        .into_iter()
        .collect();
    let kinds: Vec<_> = diagnostics.iter().map(Diagnostic::kind).collect();
    assert_eq!(kinds, vec![DiagnosticKind::Structural; 2]);
}
