//! The main REPL implementation.
//!
//! Each line is treated as a phrase and converted as typed, so stray
//! spaces are reported just as they would be for any other caller.

use std::fmt::Write as _;
use std::io::{self, Write};

use numberwords_foundation::Result;
use numberwords_parser::{Conversion, InputToken, NumberTokenizer, TokenStream, convert_tokens};
use tracing::debug;

use crate::config::ReplConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::highlight::category_color;

/// Meta commands understood by the REPL.
pub const COMMANDS: [&str; 3] = [":help", ":quit", ":tokens"];

/// What one line of input produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// A phrase was converted.
    Converted {
        /// The classified tokens, when the config asks for them.
        tokens: Option<TokenStream>,
        /// The conversion result.
        conversion: Conversion,
    },
    /// `:tokens` output.
    Tokens(TokenStream),
    /// `:help` output.
    Help,
    /// `:quit` was entered.
    Quit,
    /// An unrecognised `:` command.
    UnknownCommand(String),
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Prompt, banner and output settings.
    config: ReplConfig,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: ReplConfig) -> Result<Self> {
        let editor = RustylineEditor::new(&config)?;
        Ok(Self::with_editor(editor, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, config: ReplConfig) -> Self {
        Self { editor, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.config.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        // Skip empty lines
        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        let response = self.eval(&input);
        if response == Response::Quit {
            return Ok(false);
        }

        println!("{}", self.render(&response));
        let _ = io::stdout().flush();
        Ok(true)
    }

    /// Evaluates one line of input.
    #[must_use]
    pub fn eval(&self, input: &str) -> Response {
        if let Some(command) = input.strip_prefix(':') {
            let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
            return match name {
                "help" | "h" => Response::Help,
                "quit" | "q" | "exit" => Response::Quit,
                "tokens" | "t" => Response::Tokens(NumberTokenizer::tokenize(rest)),
                _ => Response::UnknownCommand(input.to_string()),
            };
        }

        let stream = NumberTokenizer::tokenize(input);
        let conversion = convert_tokens(&stream);
        debug!(valid = conversion.is_valid(), "repl phrase");
        Response::Converted {
            tokens: self.config.show_tokens.then_some(stream),
            conversion,
        }
    }

    /// Renders a response as printable text.
    #[must_use]
    pub fn render(&self, response: &Response) -> String {
        match response {
            Response::Converted { tokens, conversion } => {
                let mut out = String::new();
                if let Some(stream) = tokens {
                    out.push_str(&self.render_tokens(stream));
                    out.push('\n');
                }
                out.push_str(&self.render_conversion(conversion));
                out
            }
            Response::Tokens(stream) => self.render_tokens(stream),
            Response::Help => HELP.trim_end().to_string(),
            Response::Quit => String::new(),
            Response::UnknownCommand(command) => {
                self.paint(&format!("Unknown command: {command} (try :help)"), "\x1b[31m")
            }
        }
    }

    fn render_conversion(&self, conversion: &Conversion) -> String {
        if conversion.is_valid() {
            self.paint(
                &format!("Valid number: {}", conversion.value()),
                "\x1b[32m",
            )
        } else {
            conversion
                .diagnostics()
                .iter()
                .map(|d| self.paint(&d.to_string(), "\x1b[31m"))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    fn render_tokens(&self, stream: &TokenStream) -> String {
        let mut out = String::new();
        for (position, token) in stream.tokens().iter().enumerate() {
            if position > 0 {
                out.push('\n');
            }
            match token {
                InputToken::Word(word) => {
                    let category = self.paint(word.category.name(), category_color(word.category));
                    let _ = write!(out, "{position:>3}  {:<10} {category}", word.text);
                    if word.value != 0 {
                        let _ = write!(out, " ({})", word.value);
                    }
                }
                InputToken::Blank => {
                    let _ = write!(out, "{position:>3}  {}", self.paint("<blank>", "\x1b[2m"));
                }
            }
        }
        if stream.is_empty_source() {
            out.push_str(&self.paint("<empty>", "\x1b[2m"));
        }
        out
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.config.color && !color.is_empty() {
            format!("{color}{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("{}", self.paint("numberwords", "\x1b[1;36m"));
        println!("Welcome to the numberwords REPL v{}", env!("CARGO_PKG_VERSION"));
        println!("Type a number in words, or :help. Use Ctrl+D to exit.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}

const HELP: &str = "\
Type a number in words, e.g. `one hundred and fifty seven thousand`.

Vocabulary:
  one .. nine, ten .. ninety, eleven .. nineteen
  hundred, thousand, million, and
  dollar, only (accepted at the end of a phrase)

Commands:
  :tokens <phrase>   Show how each word is classified
  :help              Show this help
  :quit              Exit (or Ctrl+D)
";
