//! Integration tests for Layer 0: Foundation
//!
//! Tests for diagnostics and the error type that wraps them.

mod diagnostics;
mod errors;
