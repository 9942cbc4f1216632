//! Noise Filler — finalizes a packed grid by filling every empty cell with a random letter.

use rand::Rng;
use thiserror::Error;

use crate::puzzle::grid::{Grid, LetterGrid};

pub const ENGLISH_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one letter")]
    Empty,

    #[error("alphabet character {0:?} is not an uppercase letter")]
    InvalidLetter(char),
}

/// Letters noise is drawn from. Always non-empty and uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn new(letters: &str) -> Result<Self, AlphabetError> {
        let letters: Vec<char> = letters.chars().filter(|c| !c.is_whitespace()).collect();
        if letters.is_empty() {
            return Err(AlphabetError::Empty);
        }
        if let Some(&bad) = letters.iter().find(|c| !c.is_alphabetic() || !c.is_uppercase()) {
            return Err(AlphabetError::InvalidLetter(bad));
        }
        Ok(Self(letters))
    }

    pub fn english() -> Self {
        Self(ENGLISH_ALPHABET.chars().collect())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn letters(&self) -> &[char] {
        &self.0
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.0[rng.gen_range(0..self.0.len())]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

/// Consumes the working grid and returns the finalized letter grid.
/// Cells already holding a placed letter are kept as-is.
pub fn fill_noise<R: Rng + ?Sized>(grid: Grid, alphabet: &Alphabet, rng: &mut R) -> LetterGrid {
    let rows = grid
        .into_rows()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.unwrap_or_else(|| alphabet.sample(rng)))
                .collect()
        })
        .collect();

    LetterGrid::from_rows(rows)
}
