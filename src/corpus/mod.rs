//! Candidate secret words
//!
//! Provides the embedded default corpus, a file loader, and random word
//! selection over an injected RNG.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::CorpusError;

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a secret word uniformly at random from the corpus
///
/// The RNG is passed in so callers control determinism: the CLI seeds from
/// the OS (or from `--seed`), tests seed a [`rand::rngs::StdRng`].
///
/// Returns `None` when the corpus is empty; loaders reject empty corpora
/// before a game starts, so `None` never reaches the session.
#[must_use]
pub fn pick_word<'a, R: Rng + ?Sized>(rng: &mut R, corpus: &'a [Word]) -> Option<&'a Word> {
    corpus.choose(rng)
}
