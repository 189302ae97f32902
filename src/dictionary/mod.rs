//! Dictionary lookup
//!
//! Realness checks are delegated to a [`Dictionary`]. The game never decides on
//! its own whether a word exists; it asks the dictionary it was built with.

use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;
use std::fmt;

/// Language a dictionary answers for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
}

impl Language {
    /// Two-letter language code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A local source of recognized words
pub trait Dictionary {
    /// Check whether `word` is a recognized word in `language`
    ///
    /// `word` is already normalized (trimmed, lower-case).
    fn is_real(&self, word: &str, language: Language) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_real(&self, word: &str, language: Language) -> bool {
        (**self).is_real(word, language)
    }
}

/// Dictionary backed by an in-memory word set
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: Language,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from a list of words
    ///
    /// Entries are trimmed and lower-cased; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, Language, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::new(Language::English, ["Silent", "tinsel"]);
    /// assert!(dictionary.is_real("silent", Language::English));
    /// assert!(!dictionary.is_real("lisp", Language::English));
    /// ```
    pub fn new<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { language, words }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Language::English, DICTIONARY)
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every recognized word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn is_real(&self, word: &str, language: Language) -> bool {
        language == self.language && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_code() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::English.to_string(), "en");
    }

    #[test]
    fn normalizes_entries() {
        let dictionary = WordListDictionary::new(Language::English, ["  Listen ", "", "SILENT"]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_real("listen", Language::English));
        assert!(dictionary.is_real("silent", Language::English));
    }

    #[test]
    fn lookup_is_exact() {
        let dictionary = WordListDictionary::new(Language::English, ["silent"]);
        assert!(!dictionary.is_real("silents", Language::English));
        assert!(!dictionary.is_real("sile", Language::English));
        assert!(!dictionary.is_real("", Language::English));
    }

    #[test]
    fn duplicates_collapse() {
        let dictionary = WordListDictionary::new(Language::English, ["net", "Net", "net "]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn embedded_dictionary_knows_common_words() {
        let dictionary = WordListDictionary::embedded();
        assert!(!dictionary.is_empty());
        assert_eq!(dictionary.language(), Language::English);
        for word in ["silent", "listen", "silk", "worm", "milk"] {
            assert!(dictionary.is_real(word, Language::English), "'{word}' missing");
        }
    }

    #[test]
    fn reference_delegates() {
        fn knows<D: Dictionary>(dictionary: D, word: &str) -> bool {
            dictionary.is_real(word, Language::English)
        }

        let dictionary = WordListDictionary::new(Language::English, ["ten"]);
        assert!(knows(&dictionary, "ten"));
        assert!(!knows(&dictionary, "net"));
    }
}
