//! Batch conversion tests.

use numberwords_runtime::{BatchSummary, OutputFormat, convert_lines, convert_phrases};

#[test]
fn text_lines() {
    let input = "one Hundred thousand million\nseventeen Hundred\n\n";
    let mut out = Vec::new();
    let summary = convert_lines(input.as_bytes(), &mut out, OutputFormat::Text).unwrap();

    assert_eq!(summary, BatchSummary { total: 3, valid: 1 });
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "one Hundred thousand million => 100000000000\n\
         seventeen Hundred => invalid\n    The Hundred can only follow a digit word\n\
         \x20=> invalid\n    Blank text is not valid\n"
    );
}

#[test]
fn json_lines_are_one_object_each() {
    let mut out = Vec::new();
    let summary = convert_phrases(["twelve", "and"], &mut out, OutputFormat::Json).unwrap();
    assert_eq!(summary.total, 2);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines[0],
        r#"{"phrase":"twelve","valid":true,"value":12,"messages":[],"diagnostics":[]}"#
    );
    assert!(lines[1].starts_with(r#"{"phrase":"and","valid":false,"value":0,"#));
    assert!(lines[1].contains(r#""type":"TrailingAnd""#));
}

#[test]
fn all_valid_summary() {
    let mut out = Vec::new();
    let summary = convert_phrases(["one", "two"], &mut out, OutputFormat::Text).unwrap();
    assert!(summary.all_valid());
}

#[test]
fn unreadable_line_is_located() {
    let mut out = Vec::new();
    let err = convert_lines(&b"one\ntwo\n\xfe\n"[..], &mut out, OutputFormat::Text).unwrap_err();
    let context = err.context.expect("context");
    assert_eq!(context.to_string(), "at input:3");
    assert_eq!(String::from_utf8(out).unwrap(), "one => 1\ntwo => 2\n");
}
