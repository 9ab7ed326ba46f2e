use thiserror::Error;

use crate::{Direction, Position};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze definition: {0}")]
    InvalidDefinition(DefinitionIssue),
    #[error("Illegal move {direction} from {position:?}")]
    IllegalMove {
        direction: Direction,
        position: Position,
    },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DefinitionIssue {
    #[error("no rows")]
    NoRows,
    #[error("no open cells")]
    NoOpenCells,
}

impl From<DefinitionIssue> for MazeError {
    fn from(issue: DefinitionIssue) -> Self {
        Self::InvalidDefinition(issue)
    }
}

pub type Result<T> = core::result::Result<T, MazeError>;
