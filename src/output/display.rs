//! Display functions for command results

use super::formatters::{length_badge, outcome_line, score_label};
use crate::commands::{CheckResult, SolutionsResult};
use colored::Colorize;

/// Print the result of checking a list of words
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for entry in &result.entries {
        println!("  {}", outcome_line(&entry.word, entry.outcome, &result.root_word));
    }

    println!();
    println!(
        "{}",
        format!("Score: {}", score_label(result.score)).green().bold()
    );
    if result.rejected_count() > 0 {
        println!("Rejected: {}", result.rejected_count());
    }
}

/// Print every acceptable word for a root word
pub fn print_solutions_result(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\nNo playable words found.");
        return;
    }

    for (len, words) in result.by_length() {
        println!("\n{} {}", length_badge(len).bright_cyan(), words.join(", "));
    }

    println!(
        "\n📊 {} playable words",
        result.words.len().to_string().bright_yellow().bold()
    );
}
