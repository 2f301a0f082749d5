//! Word classification.
//!
//! Maps a single lowercase word onto its grammatical category.

use std::fmt;

use crate::vocabulary::{AND, HUNDRED, ONLY, Vocabulary};

/// The grammatical class of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenCategory {
    /// `one`..`nine`
    Digit,
    /// `eleven`..`nineteen`
    Teen,
    /// `ten`, `twenty`, ..., `ninety`
    Tens,
    /// `hundred`
    Hundred,
    /// `thousand` or `million`
    Multiplier,
    /// `and`
    And,
    /// Filler such as `dollar`
    Separator,
    /// `only`
    Only,
    /// Not in the vocabulary
    Unknown,
    /// Past the end of the sequence
    None,
}

impl TokenCategory {
    /// Teen and tens words are first-word eligible: they open a two-digit group.
    #[must_use]
    pub const fn is_group_lead(self) -> bool {
        matches!(self, Self::Teen | Self::Tens)
    }

    /// Returns true for any word that can start a group.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Digit | Self::Teen | Self::Tens)
    }

    /// Returns true for words that scale a section.
    #[must_use]
    pub const fn is_scale(self) -> bool {
        matches!(self, Self::Hundred | Self::Multiplier)
    }

    /// Returns true for words that may trail a phrase without value.
    #[must_use]
    pub const fn is_trailer(self) -> bool {
        matches!(self, Self::Separator | Self::Only)
    }

    /// The name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Digit => "Digit",
            Self::Teen | Self::Tens => "teens or tens",
            Self::Hundred => "Hundred",
            Self::Multiplier => "Multiplier",
            Self::And => "And",
            Self::Separator => "Separator",
            Self::Only => "Only",
            Self::Unknown | Self::None => "None",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a lowercase word against the standard vocabulary.
///
/// Total: words outside the vocabulary are [`TokenCategory::Unknown`] and
/// the empty string is [`TokenCategory::None`].
#[must_use]
pub fn classify(word: &str) -> TokenCategory {
    let vocab = Vocabulary::standard();
    if word.is_empty() {
        TokenCategory::None
    } else if word == HUNDRED {
        TokenCategory::Hundred
    } else if word == AND {
        TokenCategory::And
    } else if word == ONLY {
        TokenCategory::Only
    } else if vocab.multiplier(word).is_some() {
        TokenCategory::Multiplier
    } else if vocab.is_filler(word) {
        TokenCategory::Separator
    } else if vocab.tens(word).is_some() {
        TokenCategory::Tens
    } else if vocab.teen(word).is_some() {
        TokenCategory::Teen
    } else if vocab.digit(word).is_some() {
        TokenCategory::Digit
    } else {
        TokenCategory::Unknown
    }
}
