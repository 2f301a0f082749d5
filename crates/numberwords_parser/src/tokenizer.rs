//! Input tokenization.
//!
//! Converts a raw phrase into an immutable stream of classified tokens.
//! Words are separated by single spaces; any empty piece left by repeated,
//! leading or trailing spaces is kept as a [`InputToken::Blank`] so the
//! validator can report it.

use crate::classifier::{TokenCategory, classify};
use crate::vocabulary::Vocabulary;

/// A classified word from the phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberWord {
    /// The lowercased word
    pub text: String,
    /// Its grammatical category
    pub category: TokenCategory,
    /// Numeric value (scale factor for hundred/multipliers, 0 for words without one)
    pub value: i64,
    /// Index of the piece within the phrase
    pub position: usize,
}

/// A token from the phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputToken {
    /// A non-empty word
    Word(NumberWord),
    /// An empty piece between two spaces
    Blank,
}

impl InputToken {
    /// Returns the word if this is not a blank.
    #[must_use]
    pub const fn word(&self) -> Option<&NumberWord> {
        match self {
            Self::Word(word) => Some(word),
            Self::Blank => None,
        }
    }
}

/// The classified tokens of one phrase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<InputToken>,
    empty_source: bool,
}

impl TokenStream {
    /// Returns true if the phrase was the empty string.
    #[must_use]
    pub const fn is_empty_source(&self) -> bool {
        self.empty_source
    }

    /// All tokens, blanks included.
    #[must_use]
    pub fn tokens(&self) -> &[InputToken] {
        &self.tokens
    }

    /// Non-blank words in order.
    pub fn words(&self) -> impl Iterator<Item = &NumberWord> {
        self.tokens.iter().filter_map(InputToken::word)
    }

    /// Number of tokens, blanks included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenizes number phrases.
pub struct NumberTokenizer;

impl NumberTokenizer {
    /// Tokenizes a phrase into classified tokens.
    ///
    /// - Lowercases the phrase
    /// - Splits on the space character only
    /// - Classifies every word once
    #[must_use]
    pub fn tokenize(input: &str) -> TokenStream {
        if input.is_empty() {
            return TokenStream {
                tokens: Vec::new(),
                empty_source: true,
            };
        }

        let vocab = Vocabulary::standard();
        let lowered = input.to_lowercase();
        let tokens = lowered
            .split(' ')
            .enumerate()
            .map(|(position, piece)| {
                if piece.is_empty() {
                    InputToken::Blank
                } else {
                    let category = classify(piece);
                    InputToken::Word(NumberWord {
                        text: piece.to_string(),
                        category,
                        value: word_value(vocab, piece, category),
                        position,
                    })
                }
            })
            .collect();

        TokenStream {
            tokens,
            empty_source: false,
        }
    }
}

fn word_value(vocab: &Vocabulary, word: &str, category: TokenCategory) -> i64 {
    let value = match category {
        TokenCategory::Digit | TokenCategory::Teen | TokenCategory::Tens => {
            vocab.group_value(word)
        }
        TokenCategory::Hundred | TokenCategory::Multiplier => vocab.multiplier(word),
        _ => None,
    };
    value.unwrap_or(0)
}
