//! Guess feedback calculation and rendering
//!
//! Each position of a guess is classified against the secret word:
//! - `Absent`: the letter does not appear (or all its occurrences are used)
//! - `WrongPosition`: the letter appears elsewhere in the word
//! - `CorrectPosition`: the letter is exactly where it should be
//!
//! Feedback renders as one glyph per position: ⬜️ 🟡 💚.

use super::Word;
use std::fmt;

/// Classification of one guessed character relative to the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// The letter does not occur in the solution (or occurs fewer times
    /// than the guess repeats it)
    Absent,
    /// The letter occurs in the solution, at a different position
    WrongPosition,
    /// The letter is at exactly this position in the solution
    CorrectPosition,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Self::Absent => "⬜️",
            Self::WrongPosition => "🟡",
            Self::CorrectPosition => "💚",
        };
        write!(f, "{glyph}")
    }
}

/// Per-position hint sequence for one guess
///
/// Produced fresh by every [`Feedback::compute`] call and immutable after
/// that. Same length as the guess; equality is positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(Vec<Hint>);

impl Feedback {
    /// Compute the feedback when `guess` is played against `solution`
    ///
    /// This implements Wordle's exact feedback rules, including proper
    /// handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `CorrectPosition` and consume that
    ///    occurrence from the solution's letter pool
    /// 2. Second pass: left to right, mark `WrongPosition` while the pool
    ///    still holds the letter; everything else stays `Absent`
    ///
    /// Excess repeats of a letter in the guess therefore come out `Absent`
    /// once the solution's occurrences are used up.
    ///
    /// `guess` and `solution` must have equal length. A mismatch is a caller
    /// bug (the game session validates guess shape before scoring); rather
    /// than panic, the mismatch is logged and an all-`Absent` feedback of
    /// the guess's length is returned.
    ///
    /// # Examples
    /// ```
    /// use gordle::core::{Feedback, Hint, Word};
    ///
    /// let guess = Word::new("jello").unwrap();
    /// let solution = Word::new("hello").unwrap();
    /// let feedback = Feedback::compute(&guess, &solution);
    ///
    /// assert_eq!(feedback.hints()[0], Hint::Absent);
    /// assert_eq!(feedback.hints()[1], Hint::CorrectPosition);
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, solution: &Word) -> Self {
        let mut hints = vec![Hint::Absent; guess.len()];

        if guess.len() != solution.len() {
            tracing::error!(
                guess_length = guess.len(),
                solution_length = solution.len(),
                "guess and solution have different lengths, returning all-absent feedback"
            );
            return Self(hints);
        }

        let mut available = solution.char_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
            if g == s {
                hints[i] = Hint::CorrectPosition;

                // Remove from available pool
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: letters present elsewhere, while occurrences remain
        for (i, &g) in guess.chars().iter().enumerate() {
            if hints[i] == Hint::Absent
                && let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                hints[i] = Hint::WrongPosition;
                *count -= 1;
            }
        }

        Self(hints)
    }

    /// The per-position hints
    #[inline]
    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.0
    }

    /// Number of positions (always the guess length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length feedback
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Hint>> for Feedback {
    fn from(hints: Vec<Hint>) -> Self {
        Self(hints)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in &self.0 {
            write!(f, "{hint}")?;
        }
        Ok(())
    }
}
