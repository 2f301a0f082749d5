//! Integration tests for the numberwords_parser crate.
//!
//! Tests for the conversion pipeline:
//! - Vocabulary lookup
//! - Tokenization and classification
//! - Grammar validation
//! - Evaluation and full conversion

mod tokenizer_tests;
mod validator_tests;
mod vocabulary_tests;
