//! Word lists for Word Scramble
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! plus a loader for newline-delimited files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::LoadError;
