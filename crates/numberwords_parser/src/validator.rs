//! Grammar validation.
//!
//! Walks a [`TokenStream`] with a finite-state machine and collects every
//! problem it finds. The walk never stops early, so one call can surface
//! several independent diagnostics.
//!
//! # Grammar
//!
//! ```text
//! FirstWord ──digit/teen/tens──▶ SecondDigit ──digit──▶ AfterGroup
//!     ▲                              │                   │  │
//!     │                     hundred/multiplier    hundred/multiplier
//!     │                              ▼                   │  │ digit/teen/tens
//!     └───────────and─────────── AwaitAnd ◀──────────────┘  ▼
//!                                 (multiplier)          SecondDigit
//! ```

use std::fmt;

use numberwords_foundation::{Diagnostic, Diagnostics};
use tracing::{debug, trace};

use crate::classifier::TokenCategory;
use crate::tokenizer::{InputToken, NumberWord, TokenStream};

/// The word that opened the current group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GroupLead {
    /// A lone digit word, which may be scaled by `hundred`.
    Digit,
    /// A teen word, which is already complete.
    Teen,
    /// A tens word, which may be completed by a digit.
    Tens,
}

impl GroupLead {
    const fn from_category(category: TokenCategory) -> Option<Self> {
        match category {
            TokenCategory::Digit => Some(Self::Digit),
            TokenCategory::Teen => Some(Self::Teen),
            TokenCategory::Tens => Some(Self::Tens),
            _ => None,
        }
    }

    /// Number of digits the lead word contributes.
    const fn width(self) -> u8 {
        match self {
            Self::Digit => 1,
            Self::Teen | Self::Tens => 2,
        }
    }
}

/// Validator state. Each variant carries only what its transitions inspect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// A new group must start.
    FirstWord,
    /// A group has started and may be completed or scaled.
    ///
    /// `width` counts the digits written since the last `and`.
    SecondDigit { lead: GroupLead, width: u8 },
    /// A scale word was read; only `and` or another multiplier may follow.
    AwaitAnd,
    /// A tens group was completed by a digit.
    AfterGroup { lead: GroupLead, width: u8 },
}

/// The outcome of validating one phrase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Validation {
    diagnostics: Diagnostics,
}

impl Validation {
    /// Returns true when no diagnostics were reported.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The diagnostics in the order they were found.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consumes the validation, returning its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagnostics)
    }
}

/// Checks token streams against the number-word grammar.
pub struct Validator;

impl Validator {
    /// Validates a tokenized phrase.
    #[must_use]
    pub fn validate(stream: &TokenStream) -> Validation {
        let mut diagnostics = Diagnostics::new();

        if stream.is_empty_source() {
            diagnostics.push(Diagnostic::BlankText);
            debug!(diagnostics = 1, "phrase rejected");
            return Validation { diagnostics };
        }

        let tokens = stream.tokens();
        let trailer = trailer_start(tokens);
        let mut state = State::FirstWord;
        let mut previous_was_and = false;
        let mut last_word: Option<&NumberWord> = None;

        for (index, token) in tokens.iter().enumerate() {
            let InputToken::Word(word) = token else {
                diagnostics.push(Diagnostic::BlankItem);
                continue;
            };

            let is_and = word.category == TokenCategory::And;
            if is_and && previous_was_and {
                diagnostics.push(Diagnostic::RepeatedAnd);
            }
            previous_was_and = is_and;

            if word.category == TokenCategory::Unknown {
                diagnostics.push(Diagnostic::UnknownWord(word.text.clone()));
            }

            if index >= trailer {
                if state == State::FirstWord {
                    diagnostics.push(Diagnostic::ExpectedNumberWord(word.text.clone()));
                }
                trace!(word = %word.text, ?state, "trailer");
            } else {
                let next = step(state, word, &mut diagnostics);
                trace!(word = %word.text, from = ?state, to = ?next, "transition");
                state = next;
            }

            last_word = Some(word);
        }

        if last_word.is_some_and(|word| word.category == TokenCategory::And) {
            diagnostics.push(Diagnostic::TrailingAnd);
        }

        if diagnostics.is_empty() {
            debug!(words = stream.words().count(), "phrase accepted");
        } else {
            debug!(diagnostics = diagnostics.len(), "phrase rejected");
        }

        Validation { diagnostics }
    }
}

/// Index of the first token of the trailing run of separator/`only` words.
///
/// Returns `tokens.len()` when the phrase has no such tail.
fn trailer_start(tokens: &[InputToken]) -> usize {
    let mut start = tokens.len();
    for (index, token) in tokens.iter().enumerate().rev() {
        match token {
            InputToken::Blank => {}
            InputToken::Word(word) if word.category.is_trailer() => start = index,
            InputToken::Word(_) => break,
        }
    }
    start
}

fn step(state: State, word: &NumberWord, diagnostics: &mut Diagnostics) -> State {
    let category = word.category;
    match state {
        State::FirstWord => {
            if let Some(lead) = GroupLead::from_category(category) {
                State::SecondDigit {
                    lead,
                    width: lead.width(),
                }
            } else {
                diagnostics.push(Diagnostic::ExpectedNumberWord(word.text.clone()));
                State::FirstWord
            }
        }
        State::SecondDigit { lead, width } => match category {
            TokenCategory::Digit => {
                if lead != GroupLead::Tens {
                    diagnostics.push(Diagnostic::InvalidSecondDigit(word.text.clone()));
                }
                State::AfterGroup {
                    lead,
                    width: width.saturating_add(1),
                }
            }
            TokenCategory::Hundred => {
                if width > 1 || lead != GroupLead::Digit {
                    diagnostics.push(Diagnostic::HundredWithoutDigit);
                }
                State::AwaitAnd
            }
            TokenCategory::Multiplier => State::AwaitAnd,
            _ => {
                diagnostics.push(Diagnostic::UnexpectedSecondWord {
                    category: category.name(),
                    word: word.text.clone(),
                });
                state
            }
        },
        State::AwaitAnd => match category {
            TokenCategory::And => State::FirstWord,
            TokenCategory::Multiplier => State::AwaitAnd,
            _ => {
                diagnostics.push(Diagnostic::MissingAnd(word.text.clone()));
                State::AwaitAnd
            }
        },
        State::AfterGroup { lead, width } => match category {
            TokenCategory::Hundred => {
                if width > 2 || lead != GroupLead::Digit {
                    diagnostics.push(Diagnostic::HundredWithoutDigit);
                }
                State::AwaitAnd
            }
            TokenCategory::Multiplier => State::AwaitAnd,
            // Only `and` resets the digit count
            _ => match GroupLead::from_category(category) {
                Some(next) => State::SecondDigit {
                    lead: next,
                    width: width.saturating_add(next.width()),
                },
                None => state,
            },
        },
    }
}
