//! Front ends that show the maze and turn player input into [`Intent`]s.
//!
//! Presenters only see a [`Frame`], a read-only snapshot of the engine, so
//! neither of them can change the maze except by returning an intent.

use anyhow::Result;
use mazerun_core::{Direction, FINISH_GLYPH, Grid, MazeEngine, PLAYER_GLYPH, Placer, Position};

pub use console::*;
pub use terminal::*;

mod console;
mod terminal;

/// What the player wants to do next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    Restart,
    Quit,
}

/// Snapshot of everything a presenter may show.
#[derive(Copy, Clone, Debug)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub player: Position,
    pub finish: Position,
    pub moves: &'a [Direction],
    pub solved: bool,
}

impl<'a> Frame<'a> {
    pub fn new<P: Placer>(engine: &'a MazeEngine<P>, moves: &'a [Direction]) -> Self {
        Self {
            grid: engine.grid(),
            player: engine.current_pos(),
            finish: engine.finish_pos(),
            moves,
            solved: engine.is_solved(),
        }
    }

    /// Glyph for a cell with the player and finish drawn over the layout.
    pub fn glyph_at(&self, coords: Position) -> char {
        if coords == self.player {
            PLAYER_GLYPH
        } else if coords == self.finish {
            FINISH_GLYPH
        } else {
            self.grid.get(coords).map_or(' ', |cell| cell.glyph())
        }
    }

    pub fn allows(&self, direction: Direction) -> bool {
        self.moves.contains(&direction)
    }
}

pub trait Presenter {
    /// Shows the current state of the maze.
    fn present(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Blocks until the player decides what to do. When the frame is not
    /// solved, moves should be drawn from [`Frame::moves`].
    fn next_intent(&mut self, frame: &Frame<'_>) -> Result<Intent>;
}

/// Parses a direction typed as a letter or a full name.
pub fn parse_direction(text: &str) -> Option<Direction> {
    let text = text.trim();
    let mut chars = text.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        return Direction::from_letter(letter);
    }
    Direction::ALL
        .into_iter()
        .find(|direction| direction.to_string().eq_ignore_ascii_case(text))
}
