//! Parser and evaluator for integers written as English number words.
//!
//! This crate turns phrases like "one hundred and fifty seven thousand" into
//! their integer value, or into a list of diagnostics explaining why the
//! phrase is not a well-formed number.
//!
//! # Architecture
//!
//! ```text
//! "One Hundred and Fifty seven"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [one:Digit, hundred:Hundred, and:And, fifty:Tens, seven:Digit]
//! │ + CLASSIFIER    │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   VALIDATOR     │  → no diagnostics
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   EVALUATOR     │  → 157
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`vocabulary`] - The fixed word tables
//! - [`classifier`] - Word to category mapping
//! - [`tokenizer`] - Phrase to classified token stream
//! - [`validator`] - Grammar state machine and diagnostics
//! - [`evaluator`] - Value accumulation over a valid stream
//! - [`converter`] - The `validate`/`convert` entry points

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classifier;
pub mod converter;
pub mod evaluator;
pub mod tokenizer;
pub mod validator;
pub mod vocabulary;

// Re-export main types for convenience
pub use classifier::{TokenCategory, classify};
pub use converter::{Conversion, convert, convert_tokens, validate};
pub use evaluator::Evaluator;
pub use tokenizer::{InputToken, NumberTokenizer, NumberWord, TokenStream};
pub use validator::{Validation, Validator};
pub use vocabulary::Vocabulary;
