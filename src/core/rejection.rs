//! Submission outcomes and rejection reasons
//!
//! Each rejection carries the title and message the presentation layer shows
//! in its error dialog.

use std::fmt;

/// Why a submission was refused
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Fewer than three letters
    TooShort,
    /// Already accepted this round
    AlreadyUsed,
    /// Needs letters the root word does not have
    NotPossible,
    /// Not recognized by the dictionary
    NotReal,
    /// The root word itself
    SameAsRoot,
}

impl Rejection {
    /// Dialog title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Too short!",
            Self::AlreadyUsed => "Word used already!",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
            Self::SameAsRoot => "Same word!",
        }
    }

    /// Dialog message
    ///
    /// Only [`Rejection::NotPossible`] mentions the root word.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Rejection;
    ///
    /// assert_eq!(
    ///     Rejection::NotPossible.message("listen"),
    ///     "You can't spell that word from 'listen'!"
    /// );
    /// assert_eq!(Rejection::AlreadyUsed.message("listen"), "Choose another");
    /// ```
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::TooShort => "We want at least 3 letters!".to_string(),
            Self::AlreadyUsed => "Choose another".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root_word}'!"),
            Self::NotReal => "You can't just make them up!".to_string(),
            Self::SameAsRoot => "You can't use the same word we give you!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Result of submitting a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The word was added to the round
    Accepted,
    /// The word was refused; the round is unchanged
    Rejected { reason: Rejection },
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, if any
    #[inline]
    #[must_use]
    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected { reason } => Some(reason),
        }
    }
}

impl From<Rejection> for Outcome {
    fn from(reason: Rejection) -> Self {
        Self::Rejected { reason }
    }
}
