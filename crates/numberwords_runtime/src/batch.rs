//! Non-interactive conversion of many phrases.

use std::io::{BufRead, Write};

use numberwords_foundation::{Diagnostics, Error, ErrorContext, Result};
use numberwords_parser::{Conversion, convert};
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;

/// Source name attached to errors raised while reading batch input.
pub const INPUT_SOURCE: &str = "input";

/// One phrase and its outcome, as written in JSON mode.
#[derive(Debug, Serialize)]
pub struct PhraseReport<'a> {
    /// The phrase as given.
    pub phrase: &'a str,
    /// Whether it converted.
    pub valid: bool,
    /// The value, 0 when invalid.
    pub value: i64,
    /// Rendered diagnostic messages.
    pub messages: Vec<String>,
    /// Structured diagnostics.
    pub diagnostics: &'a Diagnostics,
}

impl<'a> PhraseReport<'a> {
    /// Builds a report for a converted phrase.
    #[must_use]
    pub fn new(phrase: &'a str, conversion: &'a Conversion) -> Self {
        Self {
            phrase,
            valid: conversion.is_valid(),
            value: conversion.value(),
            messages: conversion.diagnostics().messages(),
            diagnostics: conversion.diagnostics(),
        }
    }
}

/// Counts from a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Phrases processed.
    pub total: usize,
    /// Phrases that converted.
    pub valid: usize,
}

impl BatchSummary {
    /// Returns true if every phrase converted.
    #[must_use]
    pub const fn all_valid(&self) -> bool {
        self.total == self.valid
    }
}

/// Converts each phrase and writes one result per phrase.
///
/// # Errors
///
/// Returns an error carrying the failing phrase if writing fails.
pub fn convert_phrases<'a, I, W>(
    phrases: I,
    out: &mut W,
    format: OutputFormat,
) -> Result<BatchSummary>
where
    I: IntoIterator<Item = &'a str>,
    W: Write,
{
    let mut summary = BatchSummary::default();
    for phrase in phrases {
        convert_one(out, phrase, format, &mut summary)
            .map_err(|e| e.with_context(ErrorContext::new().with_phrase(phrase)))?;
    }
    info!(total = summary.total, valid = summary.valid, "batch finished");
    Ok(summary)
}

/// Reads phrases line by line and converts each one.
///
/// Line terminators are stripped; nothing else is trimmed. Output for a
/// line is written before the next line is read.
///
/// # Errors
///
/// Returns an error if reading or writing fails. The error context names
/// [`INPUT_SOURCE`] and the 1-based line, plus the phrase when the line was
/// read.
pub fn convert_lines<R, W>(input: R, out: &mut W, format: OutputFormat) -> Result<BatchSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();
    for (index, line) in input.lines().enumerate() {
        let context = ErrorContext::new()
            .with_source(INPUT_SOURCE)
            .with_line(index + 1);
        let line = line.map_err(|e| Error::from(e).with_context(context.clone()))?;
        let phrase = line.strip_suffix('\r').unwrap_or(&line);
        convert_one(out, phrase, format, &mut summary)
            .map_err(|e| e.with_context(context.with_phrase(phrase)))?;
    }
    info!(total = summary.total, valid = summary.valid, "batch finished");
    Ok(summary)
}

fn convert_one<W: Write>(
    out: &mut W,
    phrase: &str,
    format: OutputFormat,
    summary: &mut BatchSummary,
) -> Result<()> {
    let conversion = convert(phrase);
    summary.total += 1;
    if conversion.is_valid() {
        summary.valid += 1;
    }
    write_report(out, phrase, &conversion, format)
}

fn write_report<W: Write>(
    out: &mut W,
    phrase: &str,
    conversion: &Conversion,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &PhraseReport::new(phrase, conversion))
                .map_err(|e| Error::internal(format!("failed to encode report: {e}")))?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            if conversion.is_valid() {
                writeln!(out, "{phrase} => {}", conversion.value())?;
            } else {
                writeln!(out, "{phrase} => invalid")?;
                for diagnostic in conversion.diagnostics() {
                    writeln!(out, "    {diagnostic}")?;
                }
            }
        }
    }
    Ok(())
}
