//! numberwords - English number words to integers
//!
//! This crate re-exports all layers of the numberwords system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: numberwords_runtime    — REPL, CLI, batch and JSON output
//! Layer 1: numberwords_parser     — Vocabulary, classifier, validator, evaluator
//! Layer 0: numberwords_foundation — Diagnostics and Error
//! ```

pub use numberwords_foundation as foundation;
pub use numberwords_parser as parser;
pub use numberwords_runtime as runtime;
