//! Solutions command
//!
//! Lists every dictionary word a fresh round would accept for a root word.

use crate::core::MIN_WORD_LENGTH;
use crate::dictionary::WordListDictionary;
use crate::game::GameSession;
use rayon::prelude::*;
use tracing::debug;

/// Every acceptable word for a root word
pub struct SolutionsResult {
    pub root_word: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
}

impl SolutionsResult {
    /// Words grouped by length, longest group first
    #[must_use]
    pub fn by_length(&self) -> Vec<(usize, Vec<&str>)> {
        let mut groups: Vec<(usize, Vec<&str>)> = Vec::new();

        for word in &self.words {
            let len = word.chars().count();
            match groups.last_mut() {
                Some((group_len, group)) if *group_len == len => group.push(word.as_str()),
                _ => groups.push((len, vec![word.as_str()])),
            }
        }

        groups
    }
}

/// Find all words in `dictionary` that a fresh round rooted at `root_word` accepts
///
/// Words shorter than `min_length` are left out; values below the game's own
/// minimum have no effect.
#[must_use]
pub fn find_solutions(
    dictionary: &WordListDictionary,
    root_word: &str,
    min_length: usize,
) -> SolutionsResult {
    let min_length = min_length.max(MIN_WORD_LENGTH);
    let session = GameSession::with_root_word(dictionary, root_word);
    let candidates: Vec<&str> = dictionary.words().collect();

    let mut words: Vec<String> = candidates
        .par_iter()
        .filter(|word| word.chars().count() >= min_length)
        .filter_map(|word| session.check(word).ok())
        .map(crate::core::Candidate::into_string)
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    debug!(
        root_word = session.root_word(),
        scanned = candidates.len(),
        found = words.len(),
        "found solutions"
    );

    SolutionsResult {
        root_word: session.root_word().to_string(),
        words,
    }
}
