//! Puzzle Generator — orchestrates word source → packer → noise filler.
//!
//! `build_puzzle` is the synchronous, seedable core. `generate_puzzle` wraps it
//! with the async word fetch and a fresh per-call RNG, so concurrent requests
//! never share random state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::llm_client::LlmError;
use crate::puzzle::filler::{fill_noise, Alphabet};
use crate::puzzle::grid::{Grid, LetterGrid, Placement, DEFAULT_GRID_SIZE};
use crate::puzzle::packer::{place_word, PlacementOutcome, DEFAULT_MAX_TRIALS};
use crate::puzzle::word_source::WordSource;

pub const DEFAULT_WORD_COUNT: usize = 10;

#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    pub grid_size: usize,
    /// Passed through to the word source.
    pub word_count: usize,
    pub max_trials: usize,
    pub alphabet: Alphabet,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            word_count: DEFAULT_WORD_COUNT,
            max_trials: DEFAULT_MAX_TRIALS,
            alphabet: Alphabet::english(),
        }
    }
}

/// Finalized puzzle. `placements` follow input word order, minus dropped words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleResult {
    pub grid: LetterGrid,
    #[serde(rename = "answers")]
    pub placements: Vec<Placement>,
}

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("no candidate words for topic '{topic}'")]
    SourceExhausted { topic: String },

    #[error("word source failed: {0}")]
    Source(#[from] LlmError),
}

/// Uppercases and removes all whitespace.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Packs `words` into a fresh grid and fills the rest with noise.
///
/// Returns `None` only when `words` is empty. A non-empty list always yields a
/// puzzle, even if every word was dropped.
pub fn build_puzzle<S: AsRef<str>, R: Rng + ?Sized>(
    words: &[S],
    config: &PuzzleConfig,
    rng: &mut R,
) -> Option<PuzzleResult> {
    if words.is_empty() {
        return None;
    }

    let mut grid = Grid::new(config.grid_size);
    let mut placements = Vec::with_capacity(words.len());

    for raw in words {
        let word = normalize_word(raw.as_ref());
        match place_word(&mut grid, &word, config.max_trials, rng) {
            PlacementOutcome::Placed(placement) => placements.push(placement),
            PlacementOutcome::Dropped(reason) => debug!("Dropped word '{word}': {reason:?}"),
        }
    }

    let grid = fill_noise(grid, &config.alphabet, rng);

    Some(PuzzleResult { grid, placements })
}

/// Fetches words for `topic` and builds a puzzle from them.
pub async fn generate_puzzle(
    source: &dyn WordSource,
    topic: &str,
    config: &PuzzleConfig,
) -> Result<PuzzleResult, PuzzleError> {
    let words = source.fetch_words(topic, config.word_count).await?;

    let mut rng = StdRng::from_entropy();
    let puzzle = build_puzzle(&words, config, &mut rng).ok_or_else(|| {
        PuzzleError::SourceExhausted {
            topic: topic.to_string(),
        }
    })?;

    info!(
        "Generated word search for '{topic}': {}/{} words placed",
        puzzle.placements.len(),
        words.len()
    );

    Ok(puzzle)
}
