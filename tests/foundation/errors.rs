//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use numberwords_foundation::{Diagnostic, Diagnostics, Error, ErrorContext, ErrorKind};

#[test]
fn invalid_phrase_carries_diagnostics() {
    let err = Error::invalid_phrase(Diagnostics::from(Diagnostic::RepeatedAnd));
    assert!(matches!(err.kind, ErrorKind::InvalidPhrase(_)));
    assert_eq!(err.diagnostics().map(Diagnostics::len), Some(1));
    assert_eq!(err.to_string(), "invalid phrase:\nCan not repeat and");
}

#[test]
fn internal_error_has_no_diagnostics() {
    let err = Error::internal("boom");
    assert!(err.diagnostics().is_none());
    assert!(err.to_string().contains("boom"));
}

#[test]
fn io_errors_convert() {
    let err: Error = std::io::Error::other("disk gone").into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.to_string().contains("disk gone"));
}

#[test]
fn context_renders_source_line_and_phrase() {
    let context = ErrorContext::new()
        .with_source("stdin")
        .with_line(3)
        .with_phrase("one two");
    assert_eq!(context.to_string(), "at stdin:3 in \"one two\"");

    let err = Error::internal("x").with_context(context);
    assert_eq!(err.context.and_then(|c| c.line), Some(3));
}

#[test]
fn context_with_phrase_only() {
    let context = ErrorContext::new().with_phrase("and");
    assert_eq!(context.to_string(), "in \"and\"");
}
