//! Word Scramble - CLI
//!
//! Spell words from a random root word, in a TUI or a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_words, find_solutions, run_simple},
    core::MIN_WORD_LENGTH,
    dictionary::{Language, WordListDictionary},
    game::GameSession,
    output::{print_check_result, print_solutions_result},
    wordlists::{
        START_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: newline-delimited file (default: built-in list)
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Dictionary: newline-delimited file of recognized words (default: built-in English)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for picking root words (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'debug' or 'word_scramble=trace' (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log file for the TUI, which cannot log to the terminal
    #[arg(long, global = true, default_value = "word_scramble.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Submit words against a fixed root word and show each outcome
    Check {
        /// The root word to play against
        root: String,

        /// Words to submit, in order
        words: Vec<String>,
    },

    /// List every word the dictionary accepts for a root word
    Solutions {
        /// The root word to solve
        root: String,

        /// Only show words with at least this many letters
        #[arg(short = 'm', long, default_value_t = MIN_WORD_LENGTH)]
        min_length: usize,
    },
}

/// Load the root word list from `--corpus` or the embedded list
///
/// A missing or unreadable file is fatal. A readable file with no words is not;
/// the round then starts from the fallback root word.
fn load_corpus(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("could not load root word list {}", path.display())),
        None => Ok(words_from_slice(START_WORDS)),
    }
}

/// Load the dictionary from `--dictionary` or the embedded list
fn load_dictionary(path: Option<&Path>) -> Result<WordListDictionary> {
    match path {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("could not load dictionary {}", path.display()))?;
            Ok(WordListDictionary::new(Language::English, words))
        }
        None => Ok(WordListDictionary::embedded()),
    }
}

fn env_filter(log_level: Option<&str>) -> EnvFilter {
    log_level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    )
}

/// Log to stderr for line-based commands
fn init_stderr_logging(log_level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_writer(std::io::stderr)
        .init();
}

/// Log to a file so the TUI screen stays clean
fn init_file_logging(log_level: Option<&str>, path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match &command {
        Commands::Play => init_file_logging(cli.log_level.as_deref(), &cli.log_file)?,
        _ => init_stderr_logging(cli.log_level.as_deref()),
    }

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    info!(words = dictionary.len(), "dictionary ready");

    match command {
        Commands::Play => {
            let corpus = load_corpus(cli.corpus.as_deref())?;
            run_play_command(dictionary, &corpus, make_rng(cli.seed))
        }
        Commands::Simple => {
            let corpus = load_corpus(cli.corpus.as_deref())?;
            run_simple_command(dictionary, &corpus, make_rng(cli.seed))
        }
        Commands::Check { root, words } => {
            run_check_command(&dictionary, &root, &words);
            Ok(())
        }
        Commands::Solutions { root, min_length } => {
            run_solutions_command(&dictionary, &root, min_length);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: WordListDictionary, corpus: &[String], rng: StdRng) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(GameSession::new(dictionary), corpus, rng);
    run_tui(app)
}

fn run_simple_command(
    dictionary: WordListDictionary,
    corpus: &[String],
    mut rng: StdRng,
) -> Result<()> {
    let mut session = GameSession::new(dictionary);
    run_simple(&mut session, corpus, &mut rng)
}

fn run_check_command(dictionary: &WordListDictionary, root: &str, words: &[String]) {
    let result = check_words(dictionary, root, words);
    print_check_result(&result);
}

fn run_solutions_command(dictionary: &WordListDictionary, root: &str, min_length: usize) {
    let result = find_solutions(dictionary, root, min_length);
    print_solutions_result(&result);
}
