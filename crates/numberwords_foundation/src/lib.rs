//! Diagnostics and error types for numberwords.
//!
//! This crate provides:
//! - [`Diagnostic`] - A single problem found in a number phrase
//! - [`Diagnostics`] - The ordered list a validation pass returns
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagnostic;
pub mod error;

pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{Error, ErrorContext, ErrorKind};

/// Result type alias using the numberwords error type.
pub type Result<T> = std::result::Result<T, Error>;
