use core::fmt;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::Grid;

/// Single coordinate axis used for rows and columns.
pub type Coord = usize;

/// Two-dimensional coordinates `(row, col)`.
pub type Position = (Coord, Coord);

/// Legal moves from a position, at most one per direction.
pub type MoveSet = SmallVec<[Direction; 4]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Every direction, in presentation order.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// `(row, col)` displacement for a single step.
    pub const fn delta(self) -> (isize, isize) {
        DISPLACEMENTS[self as usize]
    }

    /// Single-letter name used by the console prompt.
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'n',
            Self::South => 's',
            Self::West => 'w',
            Self::East => 'e',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'n' => Some(Self::North),
            's' => Some(Self::South),
            'w' => Some(Self::West),
            'e' => Some(Self::East),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        };
        f.write_str(name)
    }
}

// Indexed by `Direction as usize`, keep in declaration order.
const DISPLACEMENTS: [(isize, isize); 4] = [
    (-1, 0), // North
    (1, 0),  // South
    (0, -1), // West
    (0, 1),  // East
];

/// Applies `delta` to `coords`, returning a value only when it lands inside
/// the grid. Rows may be ragged, so the column bound is taken from the
/// destination row.
pub(crate) fn apply_delta(coords: Position, delta: (isize, isize), grid: &Grid) -> Option<Position> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= grid.row_count() {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= grid.row_len(next_row) {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates over the legal moves from a position together with their
/// destinations. Out-of-bounds and wall destinations are both skipped.
#[derive(Debug)]
pub struct MoveIter<'a> {
    grid: &'a Grid,
    center: Position,
    index: u8,
}

impl<'a> MoveIter<'a> {
    pub(crate) fn new(grid: &'a Grid, center: Position) -> Self {
        Self {
            grid,
            center,
            index: 0,
        }
    }
}

impl Iterator for MoveIter<'_> {
    type Item = (Direction, Position);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let direction = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            let Some(target) = apply_delta(self.center, direction.delta(), self.grid) else {
                continue;
            };
            if self.grid[target].is_open() {
                return Some((direction, target));
            }
        }
    }
}
