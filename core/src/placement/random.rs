use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform choice over candidates from a seeded generator, so a seed always
/// reproduces the same sequence of placements.
#[derive(Clone, Debug)]
pub struct RandomPlacer {
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Placer for RandomPlacer {
    fn choose(&mut self, candidates: &[Position]) -> Position {
        candidates[self.rng.random_range(0..candidates.len())]
    }
}
