//! A single round of Word Scramble
//!
//! The session owns the root word, the words accepted so far and the score.
//! It is a plain state object: the presentation layer calls [`GameSession::submit`]
//! and [`GameSession::start_game`] and renders whatever state comes back.

use crate::core::{
    Candidate, FALLBACK_ROOT_WORD, LetterPool, MIN_WORD_LENGTH, Outcome, Rejection,
};
use crate::dictionary::{Dictionary, Language};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Game state for the current round
pub struct GameSession<D: Dictionary> {
    dictionary: D,
    language: Language,
    root_word: String,
    root_letters: LetterPool,
    used_words: Vec<String>,
    score: u32,
}

impl<D: Dictionary> GameSession<D> {
    /// Create a session whose round uses [`FALLBACK_ROOT_WORD`]
    ///
    /// Call [`GameSession::start_game`] to draw a root word from a list.
    pub fn new(dictionary: D) -> Self {
        Self::with_root_word(dictionary, FALLBACK_ROOT_WORD)
    }

    /// Create a session with a fixed root word
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Language, WordListDictionary};
    /// use word_scramble::game::GameSession;
    ///
    /// let dictionary = WordListDictionary::new(Language::English, ["silent"]);
    /// let mut session = GameSession::with_root_word(dictionary, "listen");
    ///
    /// assert!(session.submit("Silent").is_accepted());
    /// assert_eq!(session.used_words(), ["silent"]);
    /// assert_eq!(session.score(), 1);
    /// ```
    pub fn with_root_word(dictionary: D, root_word: &str) -> Self {
        let mut session = Self {
            dictionary,
            language: Language::English,
            root_word: String::new(),
            root_letters: LetterPool::default(),
            used_words: Vec::new(),
            score: 0,
        };
        session.reset(root_word);
        session
    }

    /// Start a new round with a root word drawn uniformly from `words`
    ///
    /// Blank entries are skipped. A list with no usable word falls back to
    /// [`FALLBACK_ROOT_WORD`]. Used words and score are cleared. Returns the
    /// new root word.
    pub fn start_game<S: AsRef<str>>(&mut self, words: &[S]) -> &str {
        self.start_game_with_rng(words, &mut rand::rng())
    }

    /// Same as [`GameSession::start_game`], drawing from the given RNG
    pub fn start_game_with_rng<S, R>(&mut self, words: &[S], rng: &mut R) -> &str
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let playable: Vec<&str> = words
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|word| !word.trim().is_empty())
            .collect();
        let root_word = playable
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_ROOT_WORD)
            .to_string();

        self.reset(&root_word);
        debug!(root_word = %self.root_word, pool = playable.len(), "started new round");

        &self.root_word
    }

    fn reset(&mut self, root_word: &str) {
        let root_word = Candidate::normalize(root_word);
        self.root_word = if root_word.is_empty() {
            FALLBACK_ROOT_WORD.to_string()
        } else {
            root_word.into_string()
        };
        self.root_letters = LetterPool::new(&self.root_word);
        self.used_words.clear();
        self.score = 0;
    }

    /// Validate a submission without changing the round
    ///
    /// Checks run in a fixed order and the first failure wins: length,
    /// originality, feasibility, realness, then identity with the root word.
    /// The current root word counts as real even if the dictionary lacks it.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of the first check that fails.
    pub fn check(&self, raw_input: &str) -> Result<Candidate, Rejection> {
        let candidate = Candidate::normalize(raw_input);
        let word = candidate.text();

        if candidate.len() < MIN_WORD_LENGTH {
            return Err(Rejection::TooShort);
        }

        if self.used_words.iter().any(|used| used == word) {
            return Err(Rejection::AlreadyUsed);
        }

        if !self.root_letters.can_spell(word) {
            return Err(Rejection::NotPossible);
        }

        if word != self.root_word && !self.dictionary.is_real(word, self.language) {
            return Err(Rejection::NotReal);
        }

        if word == self.root_word {
            return Err(Rejection::SameAsRoot);
        }

        Ok(candidate)
    }

    /// Submit a word for the current round
    ///
    /// On acceptance the normalized word is put at the front of
    /// [`GameSession::used_words`] and the score goes up by one. A rejected
    /// submission leaves the round untouched.
    pub fn submit(&mut self, raw_input: &str) -> Outcome {
        match self.check(raw_input) {
            Ok(candidate) => {
                debug!(word = %candidate, score = self.score + 1, "accepted word");
                self.used_words.insert(0, candidate.into_string());
                self.score += 1;
                Outcome::Accepted
            }
            Err(reason) => {
                debug!(input = raw_input, ?reason, "rejected word");
                Outcome::Rejected { reason }
            }
        }
    }

    /// Root word for the current round
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Number of words accepted this round
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }
}
