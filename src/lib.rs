//! Word Scramble
//!
//! A word game: spell shorter words using only the letters of a random root word.
//! Every submission runs through a fixed validation pipeline (length, originality,
//! feasibility, realness, identity) and the round keeps the accepted words and score.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Outcome, Rejection};
//! use word_scramble::dictionary::{Language, WordListDictionary};
//! use word_scramble::game::GameSession;
//!
//! let dictionary = WordListDictionary::new(Language::English, ["silent", "tinsel"]);
//! let mut session = GameSession::new(dictionary);
//! session.start_game(&["listen"]);
//!
//! assert_eq!(session.submit("silent"), Outcome::Accepted);
//! assert_eq!(
//!     session.submit("silent"),
//!     Outcome::Rejected { reason: Rejection::AlreadyUsed }
//! );
//! assert_eq!(session.score(), 1);
//! ```

// Core domain types
pub mod core;

// Dictionary lookup
pub mod dictionary;

// Round state and validation
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
