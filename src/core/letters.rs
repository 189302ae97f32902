//! Letter pool arithmetic
//!
//! A root word is a multiset of letters. Spelling a candidate consumes one
//! occurrence of each of its letters, so "bass" needs two 's' from the pool.

use rustc_hash::FxHashMap;

/// Letter counts of a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build the pool for a word
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Every letter of `word` must be available, counted with multiplicity.
    /// Runs in time linear in the length of `word`.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("glasses");
    /// assert!(!pool.can_spell("bass")); // no 'b'
    /// assert!(pool.can_spell("lass"));
    /// assert!(!pool.can_spell("sassy"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();

        for letter in word.chars() {
            match remaining.get_mut(&letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }

        true
    }
}
