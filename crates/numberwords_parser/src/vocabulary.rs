//! The fixed English number-word vocabulary.
//!
//! Four numeric tables (digits, teens, tens, multipliers) plus the filler
//! words and the `only` keyword. The numeric tables are key-disjoint; every
//! lookup is total in the sense that a miss is simply `None`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// The word for one hundred.
pub const HUNDRED: &str = "hundred";

/// The word joining sections.
pub const AND: &str = "and";

/// The trailing "exactly this amount" marker.
pub const ONLY: &str = "only";

/// Digit words and their values.
pub const DIGIT_WORDS: [(&str, i64); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Teen words and their values.
pub const TEEN_WORDS: [(&str, i64); 9] = [
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

/// Multiples of ten and their values.
pub const TENS_WORDS: [(&str, i64); 9] = [
    ("ten", 10),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

/// Words that scale the current section.
pub const MULTIPLIER_WORDS: [(&str, i64); 3] =
    [(HUNDRED, 100), ("thousand", 1_000), ("million", 1_000_000)];

/// Words with no value of their own.
pub const FILLER_WORDS: [&str; 2] = [AND, "dollar"];

static STANDARD: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::build);

/// Lookup tables for the number-word vocabulary.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    digits: HashMap<&'static str, i64>,
    teens: HashMap<&'static str, i64>,
    tens: HashMap<&'static str, i64>,
    multipliers: HashMap<&'static str, i64>,
    fillers: HashSet<&'static str>,
}

impl Vocabulary {
    /// Returns the shared English vocabulary.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    fn build() -> Self {
        Self {
            digits: DIGIT_WORDS.into_iter().collect(),
            teens: TEEN_WORDS.into_iter().collect(),
            tens: TENS_WORDS.into_iter().collect(),
            multipliers: MULTIPLIER_WORDS.into_iter().collect(),
            fillers: FILLER_WORDS.into_iter().collect(),
        }
    }

    /// Value of a digit word (`one`..`nine`).
    #[must_use]
    pub fn digit(&self, word: &str) -> Option<i64> {
        self.digits.get(word).copied()
    }

    /// Value of a teen word (`eleven`..`nineteen`).
    #[must_use]
    pub fn teen(&self, word: &str) -> Option<i64> {
        self.teens.get(word).copied()
    }

    /// Value of a multiple of ten (`ten`..`ninety`).
    #[must_use]
    pub fn tens(&self, word: &str) -> Option<i64> {
        self.tens.get(word).copied()
    }

    /// Scale factor of a multiplier word, including `hundred`.
    #[must_use]
    pub fn multiplier(&self, word: &str) -> Option<i64> {
        self.multipliers.get(word).copied()
    }

    /// Returns true for filler words (`and`, `dollar`).
    #[must_use]
    pub fn is_filler(&self, word: &str) -> bool {
        self.fillers.contains(word)
    }

    /// Value of any word that can open a group: digit, teen or tens.
    #[must_use]
    pub fn group_value(&self, word: &str) -> Option<i64> {
        self.digit(word)
            .or_else(|| self.teen(word))
            .or_else(|| self.tens(word))
    }

    /// Every known word in alphabetical order.
    #[must_use]
    pub fn words(&self) -> Vec<&'static str> {
        let mut words: Vec<&'static str> = self
            .digits
            .keys()
            .chain(self.teens.keys())
            .chain(self.tens.keys())
            .chain(self.multipliers.keys())
            .chain(self.fillers.iter())
            .copied()
            .chain(std::iter::once(ONLY))
            .collect();
        words.sort_unstable();
        words.dedup();
        words
    }
}
