//! Word representation
//!
//! A Word stores an uppercase sequence of code points. The secret word's
//! length defines the required guess length for a session, so words of any
//! positive length are accepted here; length agreement is checked by the
//! game session, not the constructor.

use rustc_hash::FxHashMap;
use std::fmt;

/// A word normalized to uppercase at construction
///
/// Characters are Unicode code points, not grapheme clusters. Scripts whose
/// graphemes span several code points (combining marks, ZWJ sequences) are
/// counted per code point; this is a known limitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one character"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to uppercase; case-mapping expansions (such as
    /// ß becoming SS) are part of the normalization and affect the length.
    ///
    /// # Errors
    /// Returns [`WordError::Empty`] if the input has no characters.
    ///
    /// # Examples
    /// ```
    /// use gordle::core::Word;
    ///
    /// let word = Word::new("hello").unwrap();
    /// assert_eq!(word.text(), "HELLO");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let chars: Vec<char> = text.chars().collect();

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a slice of code points
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of code points in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// A constructed word is never empty, but clippy wants the pair
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
