//! Gordle
//!
//! A Wordle-style word guessing game for the terminal: a secret word is
//! picked from a corpus, the player has a bounded number of attempts, and
//! each guess is scored letter by letter with proper duplicate handling.
//!
//! # Quick Start
//!
//! ```rust
//! use gordle::core::{Feedback, Word};
//!
//! let guess = Word::new("loyal").unwrap();
//! let solution = Word::new("hello").unwrap();
//!
//! let feedback = Feedback::compute(&guess, &solution);
//! println!("{feedback}"); // 🟡🟡⬜️⬜️🟡
//! ```

// Core domain types
pub mod core;

// Candidate secret words
pub mod corpus;

// Interactive game session
pub mod game;
