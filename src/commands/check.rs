//! Word check command
//!
//! Plays a fresh round with a fixed root word and records each submission's outcome.

use crate::core::{Candidate, Outcome};
use crate::dictionary::Dictionary;
use crate::game::GameSession;

/// Outcome of one submitted word
pub struct CheckEntry {
    /// The submission as the session sees it: trimmed and lower-cased
    pub word: String,
    pub outcome: Outcome,
}

/// Result of checking a list of words
pub struct CheckResult {
    pub root_word: String,
    pub entries: Vec<CheckEntry>,
    pub score: u32,
    pub used_words: Vec<String>,
}

impl CheckResult {
    /// Number of rejected submissions
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.outcome.is_accepted())
            .count()
    }
}

/// Submit `words` in order to a fresh round rooted at `root_word`
#[must_use]
pub fn check_words<D: Dictionary>(dictionary: D, root_word: &str, words: &[String]) -> CheckResult {
    let mut session = GameSession::with_root_word(dictionary, root_word);

    let entries = words
        .iter()
        .map(|input| CheckEntry {
            word: Candidate::normalize(input).into_string(),
            outcome: session.submit(input),
        })
        .collect();

    CheckResult {
        root_word: session.root_word().to_string(),
        entries,
        score: session.score(),
        used_words: session.used_words().to_vec(),
    }
}
