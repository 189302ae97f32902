//! Core domain types for Word Scramble
//!
//! Pure value types used by the validation pipeline: normalized candidates,
//! letter pools and rejection reasons. Nothing in here touches I/O.

mod candidate;
mod letters;
mod rejection;

pub use candidate::Candidate;
pub use letters::LetterPool;
pub use rejection::{Outcome, Rejection};

/// Shortest word a player may submit
pub const MIN_WORD_LENGTH: usize = 3;

/// Root word used when a round is started from an empty word list
pub const FALLBACK_ROOT_WORD: &str = "silkworm";
