//! Formatting utilities for terminal output

use crate::core::{Outcome, Rejection};
use colored::Colorize;

/// Circled-number badge for a word length, like "⑤"
///
/// Lengths past twenty fall back to "(21)".
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        1..=20 => {
            // ① is U+2460; the circled numbers 1-20 are contiguous
            let code = 0x2460 + u32::try_from(len - 1).unwrap_or(0);
            char::from_u32(code).map_or_else(|| format!("({len})"), String::from)
        }
        _ => format!("({len})"),
    }
}

/// A used word with its length badge
#[must_use]
pub fn used_word_line(word: &str) -> String {
    format!("{} {word}", length_badge(word.chars().count()))
}

/// Score label, pluralized
#[must_use]
pub fn score_label(score: u32) -> String {
    if score == 1 {
        "1 word".to_string()
    } else {
        format!("{score} words")
    }
}

/// Dialog text for a rejection: "Title: message"
#[must_use]
pub fn rejection_text(reason: Rejection, root_word: &str) -> String {
    format!("{}: {}", reason.title(), reason.message(root_word))
}

/// One colored line describing a submission outcome
#[must_use]
pub fn outcome_line(word: &str, outcome: Outcome, root_word: &str) -> String {
    match outcome {
        Outcome::Accepted => format!(
            "{} {}",
            "✓".green().bold(),
            used_word_line(word).bright_white()
        ),
        Outcome::Rejected { reason } => format!(
            "{} {} {}",
            "✗".red().bold(),
            word.bright_black(),
            rejection_text(reason, root_word).red()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_for_short_lengths() {
        assert_eq!(length_badge(1), "①");
        assert_eq!(length_badge(3), "③");
        assert_eq!(length_badge(8), "⑧");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn badges_fall_back_to_parentheses() {
        assert_eq!(length_badge(0), "(0)");
        assert_eq!(length_badge(21), "(21)");
    }

    #[test]
    fn used_word_has_badge() {
        assert_eq!(used_word_line("silent"), "⑥ silent");
    }

    #[test]
    fn score_pluralizes() {
        assert_eq!(score_label(0), "0 words");
        assert_eq!(score_label(1), "1 word");
        assert_eq!(score_label(12), "12 words");
    }

    #[test]
    fn rejection_text_includes_root() {
        assert_eq!(
            rejection_text(Rejection::NotPossible, "listen"),
            "Word not possible: You can't spell that word from 'listen'!"
        );
    }

    #[test]
    fn outcome_line_mentions_reason() {
        let line = outcome_line("xq", Outcome::from(Rejection::TooShort), "listen");
        assert!(line.contains("Too short!"));
        assert!(line.contains("xq"));

        let line = outcome_line("silent", Outcome::Accepted, "listen");
        assert!(line.contains("silent"));
    }
}
