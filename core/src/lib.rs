#![no_std]

extern crate alloc;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use placement::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod grid;
mod placement;
mod types;

/// Placement hints and policy a [`MazeEngine`] is created with. The same
/// hints are applied again on every restart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MazeSetup {
    pub start: Option<Position>,
    pub finish: Option<Position>,
    pub policy: EndpointPolicy,
}

impl MazeSetup {
    pub const fn new(start: Option<Position>, finish: Option<Position>) -> Self {
        Self {
            start,
            finish,
            policy: EndpointPolicy::Independent,
        }
    }

    pub const fn with_policy(mut self, policy: EndpointPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fills hints that are still unset from markers found in the maze text.
    pub fn or_markers(self, markers: Markers) -> Self {
        Self {
            start: self.start.or(markers.start),
            finish: self.finish.or(markers.finish),
            policy: self.policy,
        }
    }
}
