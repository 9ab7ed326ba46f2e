use serde::{Deserialize, Serialize};

/// Glyph used for walls in maze text. Uppercase is accepted as well.
pub const WALL_GLYPH: char = 'x';
/// Overlay glyph for the finish cell.
pub const FINISH_GLYPH: char = '$';
/// Overlay glyph for the player.
pub const PLAYER_GLYPH: char = '@';

/// Layout marker of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open,
}

impl Cell {
    /// Classifies a glyph of maze text. Overlay glyphs like `$` are not
    /// layout, so anything that isn't a wall is open.
    pub const fn from_glyph(glyph: char) -> Self {
        match glyph {
            'x' | 'X' => Self::Wall,
            _ => Self::Open,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => WALL_GLYPH,
            Self::Open => ' ',
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Open
    }
}
