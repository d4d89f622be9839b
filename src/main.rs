//! Gordle - CLI
//!
//! Plays one game over stdin/stdout: loads a corpus, picks a secret word,
//! and runs the interactive session.

use anyhow::{Context, Result};
use clap::Parser;
use gordle::{
    corpus::{self, WORDS, loader},
    game::Game,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gordle",
    about = "Wordle-style word guessing game for the terminal",
    version,
    author
)]
struct Cli {
    /// Corpus file (line- or space-separated words); defaults to the embedded list
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// Maximum number of guesses per game
    #[arg(short, long, default_value_t = 6)]
    max_attempts: usize,

    /// Seed for deterministic word selection
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let words = match &cli.corpus {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("unable to load corpus from {}", path.display()))?,
        None => loader::words_from_slice(WORDS),
    };
    tracing::debug!(words = words.len(), "corpus loaded");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let solution = corpus::pick_word(&mut rng, &words)
        .context("corpus has no words to pick from")?
        .clone();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = Game::new(stdin.lock(), stdout.lock(), solution, cli.max_attempts)
        .context("unable to start game")?;

    let status = game.play().context("game aborted")?;
    tracing::debug!(?status, attempts = game.attempts_used(), "session finished");

    Ok(())
}
