//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! A list is newline-delimited; blank lines are skipped and every entry is
//! trimmed and lower-cased.

use derive_more::{Display, Error};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// A word list file could not be read
#[derive(Debug, Display, Error)]
#[display("failed to read word list {}: {source}", path.display())]
pub struct LoadError {
    path: PathBuf,
    source: io::Error,
}

impl LoadError {
    /// Path of the word list that failed to load
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Split newline-delimited text into normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Listen\r\n\n  silkworm \n");
/// assert_eq!(words, vec!["listen", "silkworm"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Load words from a file
///
/// A file that exists but holds no words yields an empty list; callers decide
/// what an empty list means.
///
/// # Errors
///
/// Returns a `LoadError` if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    debug!(count = words.len(), "loaded word list");

    Ok(words)
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("word_scramble_{}_{name}", std::process::id()))
    }

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_word_list("\n\nlisten\n   \nsilent\n\n");
        assert_eq!(words, vec!["listen", "silent"]);
    }

    #[test]
    fn parse_handles_crlf_and_case() {
        let words = parse_word_list("Glasses\r\nSILKWORM\r\n");
        assert_eq!(words, vec!["glasses", "silkworm"]);
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n\n  \n").is_empty());
    }

    #[test]
    fn words_from_slice_normalizes() {
        let words = words_from_slice(&["Crane", " slate ", ""]);
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn load_from_existing_file() {
        let path = temp_path("existing.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "listen").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Enlist").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["listen", "enlist"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_empty_file_is_ok() {
        let path = temp_path("empty.txt");
        fs::File::create(&path).unwrap();

        let words = load_from_file(&path).unwrap();
        assert!(words.is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_missing_file_fails() {
        let path = temp_path("does_not_exist.txt");
        let err = load_from_file(&path).unwrap_err();

        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("failed to read word list"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
