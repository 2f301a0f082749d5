//! Integration tests for Layer 2: Runtime
//!
//! Tests for batch conversion and the REPL driven by a scripted editor.

mod batch;
