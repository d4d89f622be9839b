//! Interactive game session
//!
//! A session owns its input reader, output writer, the secret word, and the
//! attempt budget. Each turn reads one line, validates its shape, scores it
//! against the secret word, and renders the feedback. Invalid input and
//! transient read failures re-prompt without consuming an attempt.

use crate::core::{Feedback, Word, WordError};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Attempts remain and the word has not been found
    InProgress,
    /// The player found the word
    Won,
    /// Attempts or input were exhausted without finding the word
    Lost,
}

/// Errors raised by session configuration and guess validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess does not have the secret word's length
    #[error("expected {expected} characters, got {got}")]
    InvalidWordLength { expected: usize, got: usize },

    /// A session needs a positive attempt budget
    #[error("a game needs at least one attempt")]
    ZeroAttempts,
}

/// One complete play-through, from secret word to win or loss
///
/// The reader and writer are injected so the session can be driven from any
/// line-oriented streams; tests use [`io::Cursor`] and `Vec<u8>`.
///
/// # Examples
/// ```
/// use gordle::core::Word;
/// use gordle::game::{Game, GameStatus};
/// use std::io::Cursor;
///
/// let solution = Word::new("hello").unwrap();
/// let mut output = Vec::new();
/// let mut game = Game::new(Cursor::new("hello\n"), &mut output, solution, 6).unwrap();
///
/// assert_eq!(game.play().unwrap(), GameStatus::Won);
/// ```
pub struct Game<R, W> {
    reader: R,
    writer: W,
    solution: Word,
    max_attempts: usize,
    attempts_used: usize,
    status: GameStatus,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Create a new session around a secret word
    ///
    /// # Errors
    /// Returns [`GameError::ZeroAttempts`] if `max_attempts` is zero; no
    /// session is created in that case.
    pub fn new(
        reader: R,
        writer: W,
        solution: Word,
        max_attempts: usize,
    ) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::ZeroAttempts);
        }

        Ok(Self {
            reader,
            writer,
            solution,
            max_attempts,
            attempts_used: 0,
            status: GameStatus::InProgress,
        })
    }

    /// Current session state
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of valid guesses consumed so far
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    /// Run the session until the player wins, loses, or input runs out
    ///
    /// # Errors
    /// Returns an error only when writing to the output sink fails; read
    /// failures are recoverable and handled inside the turn loop.
    pub fn play(&mut self) -> io::Result<GameStatus> {
        writeln!(self.writer, "Welcome to Gordle!")?;

        while self.attempts_used < self.max_attempts {
            let attempt = self.attempts_used + 1;

            let Some(guess) = self.ask(attempt)? else {
                // Input exhausted before the word was found
                self.status = GameStatus::Lost;
                writeln!(
                    self.writer,
                    "No more guesses. The solution was: {}.",
                    self.solution
                )?;
                return Ok(self.status);
            };

            self.attempts_used = attempt;

            let feedback = Feedback::compute(&guess, &self.solution);
            writeln!(self.writer, "{feedback}")?;

            if guess == self.solution {
                self.status = GameStatus::Won;
                let noun = if attempt == 1 { "guess" } else { "guesses" };
                writeln!(
                    self.writer,
                    "{}",
                    format!("🎉 You won! You found it in {attempt} {noun}!")
                        .bright_green()
                        .bold()
                )?;
                return Ok(self.status);
            }
        }

        self.status = GameStatus::Lost;
        writeln!(
            self.writer,
            "{}",
            format!("😞 You've lost! The solution was: {}.", self.solution).bright_red()
        )?;
        Ok(self.status)
    }

    /// Read one well-shaped guess, prompting until the player provides one
    ///
    /// Shape violations and transient read failures are reported to the
    /// player and retried; neither consumes an attempt. Returns `None` when
    /// the input source reaches end of input.
    fn ask(&mut self, attempt: usize) -> io::Result<Option<Word>> {
        loop {
            writeln!(
                self.writer,
                "Enter a {}-character guess ({attempt}/{}):",
                self.solution.len(),
                self.max_attempts
            )?;
            self.writer.flush()?;

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return Ok(None),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read guess, retrying");
                    writeln!(self.writer, "Sorry, I failed to read your guess: {e}.")?;
                    continue;
                }
            }

            match self.validate(line.trim_end_matches(['\r', '\n'])) {
                Ok(word) => return Ok(Some(word)),
                Err(e) => writeln!(self.writer, "Your attempt is invalid: {e}.")?,
            }
        }
    }

    /// Check that a raw guess has the secret word's length
    ///
    /// Length is measured after uppercase normalization, so case-mapping
    /// expansions count the way they will be scored.
    fn validate(&self, input: &str) -> Result<Word, GameError> {
        let expected = self.solution.len();

        match Word::new(input) {
            Ok(word) if word.len() == expected => Ok(word),
            Ok(word) => Err(GameError::InvalidWordLength {
                expected,
                got: word.len(),
            }),
            Err(WordError::Empty) => Err(GameError::InvalidWordLength { expected, got: 0 }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn play(input: &str, solution: &str, max_attempts: usize) -> (GameStatus, usize, String) {
        let mut output = Vec::new();
        let mut game = Game::new(
            Cursor::new(input.to_string()),
            &mut output,
            word(solution),
            max_attempts,
        )
        .unwrap();

        let status = game.play().unwrap();
        let attempts = game.attempts_used();
        assert_eq!(status, game.status());
        drop(game);

        (status, attempts, String::from_utf8(output).unwrap())
    }

    #[test]
    fn game_rejects_zero_attempts() {
        let mut output = Vec::new();
        let result = Game::new(Cursor::new(""), &mut output, word("hello"), 0);

        assert_eq!(result.err(), Some(GameError::ZeroAttempts));
    }

    #[test]
    fn game_starts_in_progress() {
        let mut output = Vec::new();
        let game = Game::new(Cursor::new(""), &mut output, word("hello"), 6).unwrap();

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn game_won_on_first_guess() {
        let (status, attempts, transcript) = play("hello\n", "hello", 6);

        assert_eq!(status, GameStatus::Won);
        assert_eq!(attempts, 1);
        assert!(transcript.contains("💚💚💚💚💚"));
        assert!(transcript.contains("You found it in 1 guess!"));
    }

    #[test]
    fn game_won_after_misses() {
        let (status, attempts, transcript) = play("world\nhello\n", "hello", 6);

        assert_eq!(status, GameStatus::Won);
        assert_eq!(attempts, 2);
        assert!(transcript.contains("You found it in 2 guesses!"));
    }

    #[test]
    fn game_guess_case_insensitive() {
        let (status, attempts, _) = play("HeLLo\n", "hello", 6);

        assert_eq!(status, GameStatus::Won);
        assert_eq!(attempts, 1);
    }

    #[test]
    fn game_lost_when_attempts_exhausted() {
        let (status, attempts, transcript) = play("world\nsmart\n", "hello", 2);

        assert_eq!(status, GameStatus::Lost);
        assert_eq!(attempts, 2);
        assert!(transcript.contains("The solution was: HELLO."));
    }

    #[test]
    fn game_wrong_length_does_not_consume_attempt() {
        // POCKET is rejected; HELLO then wins on the first counted attempt
        let (status, attempts, transcript) = play("pocket\nhello\n", "hello", 6);

        assert_eq!(status, GameStatus::Won);
        assert_eq!(attempts, 1);
        assert!(transcript.contains("expected 5 characters, got 6"));
    }

    #[test]
    fn game_empty_line_does_not_consume_attempt() {
        let (status, attempts, transcript) = play("\nhello\n", "hello", 6);

        assert_eq!(status, GameStatus::Won);
        assert_eq!(attempts, 1);
        assert!(transcript.contains("expected 5 characters, got 0"));
    }

    #[test]
    fn game_end_of_input_is_a_loss() {
        let (status, attempts, transcript) = play("", "hello", 6);

        assert_eq!(status, GameStatus::Lost);
        assert_eq!(attempts, 0);
        assert!(transcript.contains("The solution was: HELLO."));
    }

    #[test]
    fn game_end_of_input_after_valid_guesses() {
        let (status, attempts, _) = play("world\n", "hello", 6);

        assert_eq!(status, GameStatus::Lost);
        assert_eq!(attempts, 1);
    }

    #[test]
    fn game_renders_feedback_each_turn() {
        let (_, _, transcript) = play("loyal\nhello\n", "hello", 6);

        assert!(transcript.contains("🟡🟡⬜️⬜️🟡"));
        assert!(transcript.contains("💚💚💚💚💚"));
    }

    #[test]
    fn game_unicode_solution() {
        let (status, attempts, _) = play("привет\n", "ПРИВЕТ", 6);

        assert_eq!(status, GameStatus::Won);
        assert_eq!(attempts, 1);
    }

    #[test]
    fn validate_nominal() {
        let mut output = Vec::new();
        let game = Game::new(Cursor::new(""), &mut output, word("hello"), 6).unwrap();

        assert_eq!(game.validate("guess"), Ok(word("guess")));
    }

    #[test]
    fn validate_rejects_wrong_lengths() {
        let mut output = Vec::new();
        let game = Game::new(Cursor::new(""), &mut output, word("hello"), 6).unwrap();

        for (input, got) in [("pocket", 6), ("dog", 3), ("", 0)] {
            assert_eq!(
                game.validate(input),
                Err(GameError::InvalidWordLength { expected: 5, got }),
                "input {input:?}"
            );
        }
    }

    /// Reader whose first read fails, then yields its inner data
    struct FlakyReader {
        fail_first: bool,
        inner: Cursor<String>,
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.fail_first {
                self.fail_first = false;
                return Err(io::Error::other("transient stream error"));
            }
            self.inner.read(buf)
        }
    }

    impl BufRead for FlakyReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if self.fail_first {
                self.fail_first = false;
                return Err(io::Error::other("transient stream error"));
            }
            self.inner.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.inner.consume(amt);
        }
    }

    #[test]
    fn game_transient_read_failure_retries_same_attempt() {
        let reader = FlakyReader {
            fail_first: true,
            inner: Cursor::new("hello\n".to_string()),
        };
        let mut output = Vec::new();
        let mut game = Game::new(reader, &mut output, word("hello"), 6).unwrap();

        let status = game.play().unwrap();
        let attempts = game.attempts_used();
        drop(game);
        let transcript = String::from_utf8(output).unwrap();

        assert_eq!(status, GameStatus::Won);
        assert_eq!(attempts, 1);
        assert!(transcript.contains("failed to read your guess"));
    }
}
