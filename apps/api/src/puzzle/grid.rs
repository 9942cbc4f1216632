//! Grid, coordinate and placement types shared by the packer and the noise filler.

use serde::{Deserialize, Serialize};

/// Side length of the square grid used when nothing else is configured.
pub const DEFAULT_GRID_SIZE: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Coordinates and directions
// ────────────────────────────────────────────────────────────────────────────

/// A cell position. Serialized as `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[usize; 2]", from = "[usize; 2]")]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The coordinate `steps` cells away along `direction`, or `None` on overflow.
    pub fn offset(self, direction: Direction, steps: usize) -> Option<Coord> {
        let (dr, dc) = direction.delta();
        Some(Coord {
            row: self.row.checked_add(steps.checked_mul(dr)?)?,
            col: self.col.checked_add(steps.checked_mul(dc)?)?,
        })
    }
}

impl From<Coord> for [usize; 2] {
    fn from(coord: Coord) -> Self {
        [coord.row, coord.col]
    }
}

impl From<[usize; 2]> for Coord {
    fn from([row, col]: [usize; 2]) -> Self {
        Coord { row, col }
    }
}

/// The closed set of orientations a word can take. No reverse or upward diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Right, Direction::Down, Direction::DownRight];

    /// `(row, col)` step vector.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    fn from_delta(delta: (usize, usize)) -> Option<Direction> {
        match delta {
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Down),
            (1, 1) => Some(Direction::DownRight),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Working grid
// ────────────────────────────────────────────────────────────────────────────

/// Square working grid. A cell is `None` until a placed word writes a letter into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Letter at `coord`, or `None` if the cell is empty or out of bounds.
    pub fn get(&self, coord: Coord) -> Option<char> {
        if self.contains(coord) {
            self.cells[self.index(coord)]
        } else {
            None
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(i, _)| Coord::new(i / self.size, i % self.size))
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Caller guarantees `coord` is in bounds.
    pub(crate) fn set(&mut self, coord: Coord, letter: char) {
        let idx = self.index(coord);
        self.cells[idx] = Some(letter);
    }

    pub(crate) fn into_rows(self) -> Vec<Vec<Option<char>>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// A successfully packed word. `end` is inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub start: Coord,
    pub end: Coord,
}

#[cfg_attr(not(test), allow(dead_code))]
impl Placement {
    /// Orientation implied by `start` and `end`. `None` for single-letter words.
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_delta((
            usize::from(self.end.row > self.start.row),
            usize::from(self.end.col > self.start.col),
        ))
    }

    /// Every coordinate the word occupies, in letter order.
    pub fn cells(&self) -> Vec<Coord> {
        let len = self.word.chars().count();
        match self.direction() {
            Some(direction) => (0..len)
                .map_while(|i| self.start.offset(direction, i))
                .collect(),
            None => vec![self.start],
        }
    }
}

/// A finalized grid where every cell holds one letter.
/// Serialized as an array of rows of one-character strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterGrid(Vec<Vec<char>>);

impl LetterGrid {
    pub(crate) fn from_rows(rows: Vec<Vec<char>>) -> Self {
        Self(rows)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.0
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.0.get(coord.row).and_then(|row| row.get(coord.col)).copied()
    }

    /// Reads the letters under a placement, e.g. to highlight or verify an answer.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn read(&self, placement: &Placement) -> Option<String> {
        placement.cells().into_iter().map(|c| self.get(c)).collect()
    }
}
