//! Core domain types
//!
//! This module contains the fundamental domain types with zero I/O
//! dependencies. All types here are pure, testable, and deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, Hint};
pub use word::{Word, WordError};
