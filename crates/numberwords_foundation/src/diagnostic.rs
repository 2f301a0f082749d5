//! Diagnostics produced while validating and evaluating number phrases.
//!
//! Diagnostics are accumulated rather than short-circuited: one walk over a
//! phrase can report several independent problems. The `Display` text of
//! each variant is the message shown to users and is kept stable.

use std::fmt;

use thiserror::Error;

/// A single problem found in a number phrase.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "detail"))]
pub enum Diagnostic {
    /// The whole phrase was empty.
    #[error("Blank text is not valid")]
    BlankText,

    /// An empty word produced by repeated, leading or trailing spaces.
    #[error("Blank items are not valid")]
    BlankItem,

    /// A word that is in none of the vocabulary tables.
    #[error("The item: {0} is not valid")]
    UnknownWord(String),

    /// A group had to start here but the word cannot start one.
    #[error("Expecting a number word rather than : {0}")]
    ExpectedNumberWord(String),

    /// A digit word completing a group that was not opened by a tens word.
    #[error("Second digit is not valid {0}")]
    InvalidSecondDigit(String),

    /// A word whose category cannot follow the first word of a group.
    #[error("Did not expect the word type of {category} in the position of second digit for {word}")]
    UnexpectedSecondWord {
        /// Rendered category of the offending word.
        category: &'static str,
        /// The offending word.
        word: String,
    },

    /// A multiplier followed by something other than `and` or another multiplier.
    #[error("A multiplier must be followed by the word 'And' rather than {0}")]
    MissingAnd(String),

    /// `hundred` not preceded by exactly one digit word.
    #[error("The Hundred can only follow a digit word")]
    HundredWithoutDigit,

    /// Two `and` words in direct succession.
    #[error("Can not repeat and")]
    RepeatedAnd,

    /// The phrase ends on a dangling `and`.
    #[error("The last word can not be 'and' most be followed by a number word")]
    TrailingAnd,

    /// The value does not fit in a signed 64-bit integer.
    #[error("The number is too large to be represented")]
    Overflow,
}

/// Coarse classification of diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DiagnosticKind {
    /// A word not in any known word set.
    Vocabulary,
    /// A known word in a position the grammar does not allow.
    GrammarPosition,
    /// A word legal in position that breaks a secondary rule.
    SemanticConstraint,
    /// Empty text or empty words from malformed spacing.
    Structural,
    /// The phrase is well formed but its value cannot be represented.
    Overflow,
}

impl Diagnostic {
    /// Returns the taxonomy bucket this diagnostic belongs to.
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Self::BlankText | Self::BlankItem => DiagnosticKind::Structural,
            Self::UnknownWord(_) => DiagnosticKind::Vocabulary,
            Self::ExpectedNumberWord(_)
            | Self::InvalidSecondDigit(_)
            | Self::UnexpectedSecondWord { .. }
            | Self::MissingAnd(_) => DiagnosticKind::GrammarPosition,
            Self::HundredWithoutDigit | Self::RepeatedAnd | Self::TrailingAnd => {
                DiagnosticKind::SemanticConstraint
            }
            Self::Overflow => DiagnosticKind::Overflow,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vocabulary => "vocabulary",
            Self::GrammarPosition => "grammar",
            Self::SemanticConstraint => "constraint",
            Self::Structural => "structure",
            Self::Overflow => "overflow",
        };
        f.write_str(name)
    }
}

/// An ordered list of diagnostics.
///
/// Order is the order in which problems were found. `Display` joins the
/// messages with newlines, so an empty list renders as the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Returns true if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Returns the diagnostics as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    /// Returns the rendered message of each diagnostic.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }

    /// Returns true if any diagnostic falls in the given bucket.
    #[must_use]
    pub fn has_kind(&self, kind: DiagnosticKind) -> bool {
        self.items.iter().any(|d| d.kind() == kind)
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(items: Vec<Diagnostic>) -> Self {
        Self { items }
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            items: vec![diagnostic],
        }
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
