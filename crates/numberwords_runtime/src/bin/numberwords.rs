//! numberwords CLI entry point.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use numberwords_foundation::Error;
use numberwords_runtime::{
    OutputFormat, Repl, ReplConfig, Verbosity, convert_lines, convert_phrases, logging,
};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    phrases: Vec<String>,
    batch_mode: bool,
    format: OutputFormat,
    verbosity: Verbosity,
    show_tokens: bool,
    show_banner: bool,
    color: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = e.downcast_ref::<Error>().and_then(|e| e.context.as_ref()) {
                eprintln!("  {context}");
            }
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig {
        show_banner: true,
        color: true,
        ..CliConfig::default()
    };

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--json" => config.format = OutputFormat::Json,
            "--tokens" => config.show_tokens = true,
            "--no-banner" => config.show_banner = false,
            "--no-color" => config.color = false,
            "-v" | "--verbose" => config.verbosity = config.verbosity.louder(),
            "-vv" => config.verbosity = config.verbosity.louder().louder(),
            "-q" | "--quiet" => config.verbosity = Verbosity::Quiet,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ => config.phrases.push(arg),
        }
    }

    Ok(config)
}

/// Returns `Ok(false)` when any converted phrase was invalid.
fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(true);
    }

    if config.show_version {
        println!("numberwords {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    logging::init(config.verbosity)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !config.phrases.is_empty() {
        let phrases = config.phrases.iter().map(String::as_str);
        let summary = convert_phrases(phrases, &mut out, config.format)?;
        out.flush()?;
        return Ok(summary.all_valid());
    }

    if config.batch_mode {
        let summary = convert_lines(io::stdin().lock(), &mut out, config.format)?;
        out.flush()?;
        return Ok(summary.all_valid());
    }
    drop(out);

    let mut repl_config = ReplConfig::default()
        .with_tokens(config.show_tokens)
        .with_color(config.color);
    if !config.show_banner {
        repl_config = repl_config.without_banner();
    }

    let mut repl = Repl::new(repl_config)?;
    repl.run()?;
    Ok(true)
}

fn print_help() {
    println!(
        "\x1b[1mnumberwords\x1b[0m - Convert English number words to integers

\x1b[1mUSAGE:\x1b[0m
    numberwords [OPTIONS] [PHRASES...]

\x1b[1mARGUMENTS:\x1b[0m
    [PHRASES...]    Phrases to convert, one per argument

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Read phrases from stdin, one per line
        --json         Print one JSON object per phrase
        --tokens       Show token categories in the REPL
        --no-banner    Skip the REPL banner
        --no-color     Disable colour in the REPL
    -v, --verbose      Raise log verbosity (repeatable)
    -q, --quiet        Only log errors

RUST_LOG overrides -v and -q.

\x1b[1mEXAMPLES:\x1b[0m
    numberwords                                   Start interactive REPL
    numberwords \"one hundred and fifty seven\"     Convert one phrase
    numberwords -b --json < phrases.txt           Convert a file as JSON lines

\x1b[1mREPL COMMANDS:\x1b[0m
    :tokens <phrase>     Show how each word is classified
    :help                Show help
    :quit                Exit REPL
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
