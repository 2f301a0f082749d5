//! Phrase conversion pipeline.
//!
//! Tokenizes once, validates, and evaluates only when validation passed.
//! Every call returns its own diagnostics; nothing is shared between calls.

use numberwords_foundation::{Diagnostics, Error, Result};
use tracing::debug;

use crate::evaluator::Evaluator;
use crate::tokenizer::{NumberTokenizer, TokenStream};
use crate::validator::{Validation, Validator};

/// The outcome of converting one phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Conversion {
    value: i64,
    diagnostics: Diagnostics,
}

impl Conversion {
    /// The converted value, or 0 when the phrase was rejected.
    ///
    /// No phrase legitimately evaluates to 0 ("zero" is not in the
    /// vocabulary), but check [`Conversion::is_valid`] rather than the value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Returns true when the phrase was accepted and evaluated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The diagnostics that rejected the phrase, if any.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns an invalid phrase error carrying the diagnostics.
    pub fn into_result(self) -> Result<i64> {
        if self.diagnostics.is_empty() {
            Ok(self.value)
        } else {
            Err(Error::invalid_phrase(self.diagnostics))
        }
    }
}

/// Validates a phrase.
///
/// The returned diagnostics render newline-joined; an empty rendering means
/// the phrase is valid.
#[must_use]
pub fn validate(text: &str) -> Validation {
    Validator::validate(&NumberTokenizer::tokenize(text))
}

/// Converts a phrase to its value.
///
/// The value is 0 whenever validation or evaluation reported a diagnostic.
#[must_use]
pub fn convert(text: &str) -> Conversion {
    convert_tokens(&NumberTokenizer::tokenize(text))
}

/// Converts an already tokenized phrase.
#[must_use]
pub fn convert_tokens(stream: &TokenStream) -> Conversion {
    let validation = Validator::validate(stream);
    if !validation.is_valid() {
        return Conversion {
            value: 0,
            diagnostics: validation.into_diagnostics(),
        };
    }

    match Evaluator::evaluate(stream) {
        Ok(value) => {
            debug!(value, "phrase converted");
            Conversion {
                value,
                diagnostics: Diagnostics::new(),
            }
        }
        Err(diagnostic) => {
            debug!(%diagnostic, "evaluation failed");
            Conversion {
                value: 0,
                diagnostics: diagnostic.into(),
            }
        }
    }
}
