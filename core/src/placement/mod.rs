use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Source of choices for endpoints that have no usable hint.
pub trait Placer {
    /// Chooses one of `candidates`. The slice is never empty and the result
    /// must be one of its elements.
    fn choose(&mut self, candidates: &[Position]) -> Position;
}

/// Whether start and finish may land on the same cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndpointPolicy {
    /// Each endpoint is placed without looking at the other one, so they can
    /// coincide and the maze starts out solved.
    #[default]
    Independent,
    /// An endpoint never reuses the cell of the other one, unless the grid
    /// has a single open cell.
    Distinct,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Finish,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Finish => "finish",
        })
    }
}

/// Resolves the cell for `endpoint`.
///
/// A hint naming an open cell (other than `avoid`) is used as is. Anything
/// else falls back to a full scan of open cells and a choice by `placer`.
pub fn place_endpoint<P: Placer + ?Sized>(
    placer: &mut P,
    grid: &Grid,
    endpoint: Endpoint,
    hint: Option<Position>,
    avoid: Option<Position>,
) -> Position {
    if let Some(hint) = hint {
        if grid.is_open(hint) && avoid != Some(hint) {
            log::debug!("Placed {endpoint} at hinted {hint:?}");
            return hint;
        }
        log::debug!("Declined {endpoint} hint {hint:?}, placing randomly");
    }

    let mut candidates: Vec<Position> = grid
        .open_cells()
        .filter(|&coords| Some(coords) != avoid)
        .collect();
    if candidates.is_empty() {
        log::warn!("Cannot keep {endpoint} apart from {avoid:?}, only one open cell");
        candidates = grid.open_cells().collect();
    }

    let coords = placer.choose(&candidates);
    log::debug!(
        "Placed {endpoint} at {coords:?}, chosen from {} candidates",
        candidates.len()
    );
    coords
}
