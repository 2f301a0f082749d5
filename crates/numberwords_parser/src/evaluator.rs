//! Value evaluation.
//!
//! Walks an already validated [`TokenStream`] and accumulates its value.
//! `section` holds the value since the last flush; `and` (outside a
//! `hundred and ...` group) and the end of the phrase flush it into
//! `result`, so independent sections add up:
//!
//! ```text
//! one hundred and fifty nine thousand and three
//! └──── (100 + 59) × 1000 ───────────┘     └ + 3  = 159003
//! ```

use numberwords_foundation::Diagnostic;
use tracing::trace;

use crate::classifier::TokenCategory;
use crate::tokenizer::TokenStream;

/// Accumulates the value of a phrase.
#[derive(Debug, Default)]
struct Accumulator {
    result: i64,
    section: i64,
    /// Set by `hundred and`: the next group adds into the section.
    joining: bool,
}

impl Accumulator {
    fn flush(&mut self) -> Result<(), Diagnostic> {
        self.result = self
            .result
            .checked_add(self.section)
            .ok_or(Diagnostic::Overflow)?;
        self.section = 0;
        Ok(())
    }

    fn open_group(&mut self, value: i64) -> Result<(), Diagnostic> {
        if self.joining {
            self.joining = false;
            self.add(value)
        } else {
            self.flush()?;
            self.section = value;
            Ok(())
        }
    }

    fn add(&mut self, value: i64) -> Result<(), Diagnostic> {
        self.section = self
            .section
            .checked_add(value)
            .ok_or(Diagnostic::Overflow)?;
        Ok(())
    }

    fn scale(&mut self, factor: i64) -> Result<(), Diagnostic> {
        self.section = self
            .section
            .checked_mul(factor)
            .ok_or(Diagnostic::Overflow)?;
        Ok(())
    }
}

/// Computes the value of validated phrases.
pub struct Evaluator;

impl Evaluator {
    /// Evaluates a token stream the validator accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Diagnostic::Overflow`] if the value does not fit in an `i64`.
    pub fn evaluate(stream: &TokenStream) -> Result<i64, Diagnostic> {
        let mut acc = Accumulator::default();
        let mut previous = TokenCategory::None;

        for word in stream.words() {
            match word.category {
                TokenCategory::Digit if previous == TokenCategory::Tens => acc.add(word.value)?,
                TokenCategory::Digit | TokenCategory::Teen | TokenCategory::Tens => {
                    acc.open_group(word.value)?;
                }
                TokenCategory::Hundred | TokenCategory::Multiplier => acc.scale(word.value)?,
                TokenCategory::And => {
                    if previous == TokenCategory::Hundred {
                        acc.joining = true;
                    } else {
                        acc.flush()?;
                    }
                }
                TokenCategory::Separator
                | TokenCategory::Only
                | TokenCategory::Unknown
                | TokenCategory::None => {}
            }
            trace!(
                word = %word.text,
                section = acc.section,
                result = acc.result,
                "evaluated"
            );
            previous = word.category;
        }

        acc.flush()?;
        Ok(acc.result)
    }
}
