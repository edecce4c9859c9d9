//! Letterwise - CLI
//!
//! Letter-frequency Wordle helper: start words, exploration words and the
//! words still matching your guesses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::TypedValueParser};
use letterwise::{
    commands::{ReportConfig, build_report},
    core::{ConstraintInput, Language},
    output::{print_frequencies, print_header, print_report, print_start_words, print_suggestions},
    solver::{DEFAULT_WORD_LENGTH, Pipeline, Selection},
    wordlists::{loader::load_from_file, raw_dictionary},
};

#[derive(Parser)]
#[command(
    name = "letterwise",
    about = "Wordle helper using letter frequencies to pick exploration words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary language: english (en) or swedish (sv)
    #[arg(short, long, global = true, default_value = "english")]
    language: String,

    /// Word length
    #[arg(
        short = 'n',
        long,
        global = true,
        default_value_t = DEFAULT_WORD_LENGTH,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    length: usize,

    /// Comma-separated dictionary file (default: embedded list for the language)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// Known letters by position, blank or '_' for unknown, e.g. "_R__E"
    #[arg(short, long, global = true, default_value = "")]
    correct: String,

    /// Present-but-misplaced letters per position, comma-separated, e.g. "A,,N,,"
    #[arg(short, long, global = true, default_value = "")]
    present: String,

    /// Letters known not to be in the word
    #[arg(short, long, global = true, default_value = "")]
    absent: String,

    /// Guess feedback as GUESS=MARKS (G/Y/-), repeatable, e.g. crane=-G-Y-
    #[arg(short, long, global = true)]
    feedback: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Every section (default)
    Report,

    /// Letter frequencies
    Frequencies,

    /// Best start words and second discovery words
    Start,

    /// Remaining valid guesses and discovery words
    Suggest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let language = Language::from_name(&cli.language)
        .with_context(|| format!("Unknown language '{}'", cli.language))?;
    let selection = Selection::new(language, cli.length);

    let raw = load_dictionary(cli.dictionary.as_deref(), language)?;
    let mut pipeline = Pipeline::new(selection);
    pipeline.set_raw_dictionary(raw);

    let config = ReportConfig {
        selection,
        input: ConstraintInput {
            correct: cli.correct,
            present: split_present(&cli.present),
            absent: cli.absent,
        },
        feedback: cli.feedback,
    };
    let report = build_report(&mut pipeline, &config).map_err(|e| anyhow::anyhow!(e))?;

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => print_report(&report),
        Commands::Frequencies => {
            print_header(&report);
            print_frequencies(&report);
        }
        Commands::Start => {
            print_header(&report);
            print_start_words(&report);
        }
        Commands::Suggest => {
            print_header(&report);
            print_suggestions(&report);
        }
    }

    Ok(())
}

/// Initialize logging, `RUST_LOG` still applies on top
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}

/// Load the raw dictionary buffer from a file or the embedded lists
fn load_dictionary(path: Option<&str>, language: Language) -> Result<String> {
    match path {
        Some(path) => {
            load_from_file(path).with_context(|| format!("Failed to read dictionary {path}"))
        }
        None => {
            log::info!("Using embedded {language} dictionary");
            Ok(raw_dictionary(language).to_string())
        }
    }
}

/// Split the per-position present letters; an empty flag means none
fn split_present(present: &str) -> Vec<String> {
    if present.is_empty() {
        Vec::new()
    } else {
        present.split(',').map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn length_flag_parses_positive_values() {
        let cli = Cli::try_parse_from(["letterwise", "-n", "6"]).unwrap();
        assert_eq!(cli.length, 6);

        let cli = Cli::try_parse_from(["letterwise"]).unwrap();
        assert_eq!(cli.length, DEFAULT_WORD_LENGTH);

        assert!(Cli::try_parse_from(["letterwise", "--length", "0"]).is_err());
        assert!(Cli::try_parse_from(["letterwise", "--length", "-3"]).is_err());
    }

    #[test]
    fn present_flag_splits_per_position() {
        assert!(split_present("").is_empty());
        assert_eq!(split_present("a,,n"), vec!["a", "", "n"]);
    }
}
