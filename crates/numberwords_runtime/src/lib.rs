//! REPL, CLI, and batch conversion for numberwords.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`batch`] - Text and JSON conversion of many phrases
//! - [`logging`] - Subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod config;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod repl;

pub use batch::{BatchSummary, PhraseReport, convert_lines, convert_phrases};
pub use config::{OutputFormat, ReplConfig, Verbosity};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::NumberHighlighter;
pub use repl::{Repl, Response};
