use alloc::vec::Vec;
use core::ops::Index;
use serde::Serialize;

use crate::types::apply_delta;
use crate::*;

/// Overlay markers found in maze text while building a [`Grid`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Markers {
    /// First `@` glyph.
    pub start: Option<Position>,
    /// First `$` glyph.
    pub finish: Option<Position>,
}

/// Static wall/open layout of a maze.
///
/// Rows may have different lengths. The layout never changes once built, the
/// only way to obtain a `Grid` is through [`Grid::from_definition`] or
/// [`Grid::parse`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    open_count: usize,
}

impl Grid {
    /// Builds a grid from maze text lines, one row per line and one cell per
    /// character.
    pub fn from_definition<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse(lines).map(|(grid, _)| grid)
    }

    /// Same as [`Grid::from_definition`] but splits a single block of text on
    /// line breaks.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_definition(text.lines())
    }

    /// Builds a grid and also reports where the `@` and `$` overlay glyphs
    /// were. Both are normalized to [`Cell::Open`] in the grid.
    pub fn parse<I, S>(lines: I) -> Result<(Self, Markers)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut markers = Markers::default();
        let mut open_count = 0;

        let mut rows = Vec::new();
        for (row, line) in lines.into_iter().enumerate() {
            let mut cells = Vec::new();
            for (col, glyph) in line.as_ref().chars().enumerate() {
                match glyph {
                    PLAYER_GLYPH if markers.start.is_none() => markers.start = Some((row, col)),
                    FINISH_GLYPH if markers.finish.is_none() => markers.finish = Some((row, col)),
                    _ => {}
                }
                let cell = Cell::from_glyph(glyph);
                if cell.is_open() {
                    open_count += 1;
                }
                cells.push(cell);
            }
            rows.push(cells);
        }

        if rows.is_empty() {
            return Err(DefinitionIssue::NoRows.into());
        }
        if open_count == 0 {
            return Err(DefinitionIssue::NoOpenCells.into());
        }

        log::debug!("Built {}-row grid with {} open cells", rows.len(), open_count);
        Ok((Self { rows, open_count }, markers))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of `row`, zero for rows past the end.
    pub fn row_len(&self, row: Coord) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn row(&self, row: Coord) -> Option<&[Cell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn open_count(&self) -> usize {
        self.open_count
    }

    pub fn get(&self, (row, col): Position) -> Option<Cell> {
        self.rows.get(row)?.get(col).copied()
    }

    pub fn contains(&self, coords: Position) -> bool {
        self.get(coords).is_some()
    }

    /// Whether `coords` is inside the grid and not a wall.
    pub fn is_open(&self, coords: Position) -> bool {
        self.get(coords).is_some_and(Cell::is_open)
    }

    /// Every open cell in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_open())
                .map(move |(col, _)| (row, col))
        })
    }

    /// Legal moves from `coords` with their destinations.
    pub fn iter_moves(&self, coords: Position) -> MoveIter<'_> {
        MoveIter::new(self, coords)
    }

    /// Directions whose destination from `coords` is in bounds and open, in
    /// [`Direction::ALL`] order.
    pub fn available_moves(&self, coords: Position) -> MoveSet {
        let moves: MoveSet = self.iter_moves(coords).map(|(direction, _)| direction).collect();
        log::trace!("Available moves from {:?}: {:?}", coords, moves);
        moves
    }

    /// Destination of a single step, if that step is legal.
    pub fn step(&self, coords: Position, direction: Direction) -> Option<Position> {
        apply_delta(coords, direction.delta(), self).filter(|&target| self[target].is_open())
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): Position) -> &Self::Output {
        &self.rows[row][col]
    }
}
