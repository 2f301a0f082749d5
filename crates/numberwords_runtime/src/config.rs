//! Configuration for the REPL, batch output, and logging.

/// How results are written in batch mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per phrase.
    Json,
}

/// Logging verbosity selected on the command line.
///
/// `RUST_LOG` takes precedence when it is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Per-phrase verdicts.
    Verbose,
    /// Every state machine transition.
    Trace,
}

impl Verbosity {
    /// Steps one level up, saturating at [`Verbosity::Trace`].
    #[must_use]
    pub const fn louder(self) -> Self {
        match self {
            Self::Quiet => Self::Normal,
            Self::Normal => Self::Verbose,
            Self::Verbose | Self::Trace => Self::Trace,
        }
    }

    /// The default filter directive for this level.
    #[must_use]
    pub const fn filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Configuration for the interactive REPL.
#[derive(Clone, Debug)]
pub struct ReplConfig {
    /// Primary prompt.
    pub prompt: String,

    /// Whether to show the welcome banner.
    pub show_banner: bool,

    /// Print the classified tokens before each result.
    pub show_tokens: bool,

    /// Use ANSI colours in output.
    pub color: bool,

    /// Number of history entries kept by the line editor.
    pub history_size: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "#> ".to_string(),
            show_banner: true,
            show_tokens: false,
            color: true,
            history_size: 1000,
        }
    }
}

impl ReplConfig {
    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Builder method to print tokens before each result.
    #[must_use]
    pub fn with_tokens(mut self, show_tokens: bool) -> Self {
        self.show_tokens = show_tokens;
        self
    }

    /// Builder method to enable or disable colour.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder method to set the history size.
    #[must_use]
    pub fn with_history_size(mut self, history_size: usize) -> Self {
        self.history_size = history_size;
        self
    }
}
