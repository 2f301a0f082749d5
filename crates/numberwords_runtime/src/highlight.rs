//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use numberwords_parser::{TokenCategory, classify};

/// Colours each word of a phrase by its category.
pub struct NumberHighlighter;

impl NumberHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        // Meta commands are shown as typed
        if line.starts_with(':') || line.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        for (i, word) in line.split(' ').enumerate() {
            if i > 0 {
                result.push(' ');
            }
            let color = category_color(classify(&word.to_lowercase()));
            if color.is_empty() {
                result.push_str(word);
            } else {
                result.push_str(color);
                result.push_str(word);
                result.push_str("\x1b[0m");
            }
        }

        Cow::Owned(result)
    }
}

impl Default for NumberHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// ANSI colour for a category; empty for no colour.
#[must_use]
pub const fn category_color(category: TokenCategory) -> &'static str {
    match category {
        // Number words - magenta
        c if c.is_number() => "\x1b[35m",
        // Scale words - bold cyan
        c if c.is_scale() => "\x1b[1;36m",
        TokenCategory::And => "\x1b[32m",
        // Fillers - dim
        c if c.is_trailer() => "\x1b[2m",
        TokenCategory::Unknown => "\x1b[4;31m",
        _ => "",
    }
}
