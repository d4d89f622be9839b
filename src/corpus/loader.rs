//! Corpus loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! default list.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that prevent a corpus from being used
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus source could not be opened or read
    #[error("unable to open {path:?} for reading: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The corpus source yielded zero words
    #[error("corpus is empty")]
    Empty,
}

/// Load words from a file
///
/// The file is expected to be a line- or space-separated list of words.
///
/// # Errors
///
/// Returns [`CorpusError::Unreadable`] if the file cannot be opened or read,
/// and [`CorpusError::Empty`] if it contains no words.
///
/// # Examples
/// ```no_run
/// use gordle::corpus::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<Word> = content
        .split_whitespace()
        .filter_map(|entry| Word::new(entry).ok())
        .collect();

    if words.is_empty() {
        return Err(CorpusError::Empty);
    }

    Ok(words)
}

/// Convert the embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use gordle::corpus::loader::words_from_slice;
/// use gordle::corpus::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
