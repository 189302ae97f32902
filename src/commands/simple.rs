//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Commands start with ':' so they never
//! collide with a guess.

use crate::core::Candidate;
use crate::dictionary::Dictionary;
use crate::game::GameSession;
use crate::output::formatters::{outcome_line, score_label, used_word_line};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{info, instrument};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<D, R>(session: &mut GameSession<D>, corpus: &[String], rng: &mut R) -> Result<()>
where
    D: Dictionary,
    R: Rng + ?Sized,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with_io(session, corpus, rng, stdin.lock(), stdout.lock())
}

/// Run the simple interactive CLI mode on the given streams
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
#[instrument(skip_all, fields(corpus = corpus.len()))]
pub fn run_simple_with_io<D, R, I, O>(
    session: &mut GameSession<D>,
    corpus: &[String],
    rng: &mut R,
    mut input: I,
    mut output: O,
) -> Result<()>
where
    D: Dictionary,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Spell words of three or more letters from the root word.")?;
    writeln!(output, "Commands: ':new' for a new root word, ':words' to list your words, ':quit' to exit\n")?;

    session.start_game_with_rng(corpus, rng);
    print_round_header(&mut output, session.root_word())?;

    loop {
        write!(output, "Word: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => {}
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                session.start_game_with_rng(corpus, rng);
                info!(root_word = session.root_word(), "restarted round");
                print_round_header(&mut output, session.root_word())?;
            }
            ":words" | ":w" => {
                if session.used_words().is_empty() {
                    writeln!(output, "No words yet.\n")?;
                } else {
                    for word in session.used_words() {
                        writeln!(output, "  {}", used_word_line(word))?;
                    }
                    writeln!(output)?;
                }
            }
            word => {
                let outcome = session.submit(word);
                let shown = Candidate::normalize(word);
                writeln!(output, "{}", outcome_line(shown.text(), outcome, session.root_word()))?;
                writeln!(output, "Score: {}\n", score_label(session.score()))?;
            }
        }
    }

    writeln!(
        output,
        "\n👋 Thanks for playing! Final score: {}\n",
        score_label(session.score())
    )?;
    Ok(())
}

fn print_round_header<O: Write>(output: &mut O, root_word: &str) -> io::Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(output, "Root word: {}", root_word.to_uppercase().bright_yellow().bold())?;
    writeln!(output, "────────────────────────────────────────────────────────────\n")
}
