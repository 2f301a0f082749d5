//! Error types for numberwords.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Problems with a phrase itself are reported as [`Diagnostics`]; an
//! [`Error`] wraps them when a caller wants a `Result`.

use std::fmt;

use thiserror::Error;

use crate::diagnostic::Diagnostics;

/// The main error type for numberwords operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid phrase error from the diagnostics that rejected it.
    #[must_use]
    pub fn invalid_phrase(diagnostics: Diagnostics) -> Self {
        Self::new(ErrorKind::InvalidPhrase(diagnostics))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns the diagnostics if this error rejected a phrase.
    #[must_use]
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match &self.kind {
            ErrorKind::InvalidPhrase(diagnostics) => Some(diagnostics),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The phrase was rejected by validation or evaluation.
    #[error("invalid phrase:\n{0}")]
    InvalidPhrase(Diagnostics),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(std::io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The phrase being processed.
    pub phrase: Option<String>,
    /// Where the phrase came from (argument, stdin, REPL).
    pub source: Option<String>,
    /// 1-based line number within the source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the phrase.
    #[must_use]
    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = Some(phrase.into());
        self
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if let Some(phrase) = &self.phrase {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "in \"{phrase}\"")?;
        }
        Ok(())
    }
}
