//! Grid Packer — randomized trial placement of a single word.
//!
//! Each trial draws a uniform start cell and a uniform direction, rejects the
//! trial if the word would run off the grid, and otherwise accepts it only when
//! every cell the word covers is empty or already holds the needed letter.
//! Crossing words therefore share cells; conflicting words never do.

use rand::Rng;

use crate::puzzle::grid::{Coord, Direction, Grid, Placement};

/// Trials per word before it is dropped.
pub const DEFAULT_MAX_TRIALS: usize = 100;

/// Why a word produced no placement. Dropping is steady-state behaviour, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    Empty,
    /// Anything other than uppercase letters, including caseless scripts.
    NotUppercaseLetters,
    TooLong { len: usize, size: usize },
    TrialsExhausted { trials: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed(Placement),
    Dropped(DropReason),
}

impl PlacementOutcome {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn placement(self) -> Option<Placement> {
        match self {
            PlacementOutcome::Placed(p) => Some(p),
            PlacementOutcome::Dropped(_) => None,
        }
    }
}

/// Attempts to pack `word` into `grid` within `max_trials` random trials.
///
/// Words longer than the grid, empty words and words containing anything but
/// uppercase letters are dropped before any randomness is drawn.
pub fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    max_trials: usize,
    rng: &mut R,
) -> PlacementOutcome {
    let letters: Vec<char> = word.chars().collect();

    if letters.is_empty() {
        return PlacementOutcome::Dropped(DropReason::Empty);
    }
    if !letters.iter().all(|c| c.is_alphabetic() && c.is_uppercase()) {
        return PlacementOutcome::Dropped(DropReason::NotUppercaseLetters);
    }
    let size = grid.size();
    if letters.len() > size {
        return PlacementOutcome::Dropped(DropReason::TooLong {
            len: letters.len(),
            size,
        });
    }

    for _ in 0..max_trials {
        let start = Coord::new(rng.gen_range(0..size), rng.gen_range(0..size));
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];

        if let Some(placement) = place_letters_at(grid, &letters, start, direction) {
            return PlacementOutcome::Placed(placement);
        }
    }

    PlacementOutcome::Dropped(DropReason::TrialsExhausted { trials: max_trials })
}

/// Runs a single trial at a fixed start and direction.
/// On success the grid is written and the placement returned; on failure the grid is untouched.
#[cfg_attr(not(test), allow(dead_code))]
pub fn try_place_at(
    grid: &mut Grid,
    word: &str,
    start: Coord,
    direction: Direction,
) -> Option<Placement> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return None;
    }
    place_letters_at(grid, &letters, start, direction)
}

fn place_letters_at(
    grid: &mut Grid,
    letters: &[char],
    start: Coord,
    direction: Direction,
) -> Option<Placement> {
    if !grid.contains(start) {
        return None;
    }
    let end = start.offset(direction, letters.len() - 1)?;
    if !grid.contains(end) {
        return None;
    }

    // Start and end are in bounds, so every cell between them is too.
    let cells: Vec<Coord> = (0..letters.len())
        .filter_map(|i| start.offset(direction, i))
        .collect();

    let fits = cells
        .iter()
        .zip(letters)
        .all(|(&cell, &letter)| grid.get(cell).map_or(true, |existing| existing == letter));
    if !fits {
        return None;
    }

    for (&cell, &letter) in cells.iter().zip(letters) {
        grid.set(cell, letter);
    }

    Some(Placement {
        word: letters.iter().collect(),
        start,
        end,
    })
}
