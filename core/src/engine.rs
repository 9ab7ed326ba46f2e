use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Solved, through a move onto the finish
/// - Solved -> Playing, through a restart or re-placement
///
/// A placement can also produce Solved directly when both endpoints land on
/// the same cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Solved,
}

impl EngineState {
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Solved,
}

impl MoveOutcome {
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// Owns the grid and both endpoints of a maze session.
#[derive(Clone, Debug)]
pub struct MazeEngine<P = RandomPlacer> {
    grid: Grid,
    setup: MazeSetup,
    placer: P,
    current: Position,
    finish: Position,
}

impl MazeEngine {
    /// Creates an engine whose random placements come from `seed`.
    pub fn new(grid: Grid, setup: MazeSetup, seed: u64) -> Self {
        Self::with_placer(grid, setup, RandomPlacer::new(seed))
    }
}

impl<P: Placer> MazeEngine<P> {
    pub fn with_placer(grid: Grid, setup: MazeSetup, mut placer: P) -> Self {
        let (current, finish) = place_both(&mut placer, &grid, setup);
        Self {
            grid,
            setup,
            placer,
            current,
            finish,
        }
    }

    /// Read-only view of the layout.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn setup(&self) -> MazeSetup {
        self.setup
    }

    pub fn current_pos(&self) -> Position {
        self.current
    }

    pub fn finish_pos(&self) -> Position {
        self.finish
    }

    pub fn is_solved(&self) -> bool {
        self.current == self.finish
    }

    pub fn state(&self) -> EngineState {
        if self.is_solved() {
            EngineState::Solved
        } else {
            EngineState::Playing
        }
    }

    /// Legal moves from the player's position.
    pub fn available_moves(&self) -> MoveSet {
        self.grid.available_moves(self.current)
    }

    /// Moves the player one step. Legality is decided before anything is
    /// touched, so a rejected move leaves the engine as it was.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveOutcome> {
        let Some(target) = self.grid.step(self.current, direction) else {
            log::debug!("Rejected {direction} from {:?}", self.current);
            return Err(MazeError::IllegalMove {
                direction,
                position: self.current,
            });
        };

        log::debug!("Moved {direction} from {:?} to {target:?}", self.current);
        self.current = target;

        if self.is_solved() {
            log::debug!("Reached finish at {target:?}");
            Ok(MoveOutcome::Solved)
        } else {
            Ok(MoveOutcome::Moved)
        }
    }

    /// Places the player, preferring `hint` when it names an open cell.
    pub fn place_start(&mut self, hint: Option<Position>) {
        let avoid = self.avoid(self.finish);
        self.current = place_endpoint(&mut self.placer, &self.grid, Endpoint::Start, hint, avoid);
    }

    /// Places the finish, preferring `hint` when it names an open cell.
    pub fn place_finish(&mut self, hint: Option<Position>) {
        let avoid = self.avoid(self.current);
        self.finish = place_endpoint(&mut self.placer, &self.grid, Endpoint::Finish, hint, avoid);
    }

    /// Places both endpoints again from the hints the engine was created
    /// with. The grid is kept.
    pub fn restart(&mut self) {
        log::debug!("Restarting with {:?}", self.setup);
        (self.current, self.finish) = place_both(&mut self.placer, &self.grid, self.setup);
    }

    fn avoid(&self, other: Position) -> Option<Position> {
        match self.setup.policy {
            EndpointPolicy::Independent => None,
            EndpointPolicy::Distinct => Some(other),
        }
    }
}

/// Start first, then finish, the finish only looking at the new start.
fn place_both<P: Placer>(placer: &mut P, grid: &Grid, setup: MazeSetup) -> (Position, Position) {
    let start = place_endpoint(placer, grid, Endpoint::Start, setup.start, None);
    let avoid = match setup.policy {
        EndpointPolicy::Independent => None,
        EndpointPolicy::Distinct => Some(start),
    };
    let finish = place_endpoint(placer, grid, Endpoint::Finish, setup.finish, avoid);
    (start, finish)
}
