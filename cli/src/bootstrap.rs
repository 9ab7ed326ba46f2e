use std::fs;

use anyhow::{Context, Result};
use mazerun_core::{Grid, MazeEngine, MazeSetup};

use crate::config::{MapSource, Settings};

/// Maze used when no map is given. `$` marks the default finish.
pub const SAMPLE_MAZE: [&str; 6] = [
    "  x   ",
    "x   x ",
    "  xx  ",
    " x  xx",
    "  x   ",
    "x   x$",
];

impl MapSource {
    /// Maze text lines for this source.
    pub fn lines(&self) -> Result<Vec<String>> {
        Ok(match self {
            Self::Builtin => Vec::from(SAMPLE_MAZE.map(String::from)),
            Self::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Could not read map file {}", path.display()))?
                .lines()
                .map(str::to_owned)
                .collect(),
            Self::Rows(rows) => rows.clone(),
        })
    }
}

/// Builds the engine described by `settings`. Hints from the settings win
/// over `@`/`$` markers in the maze text.
pub fn build_engine(settings: &Settings) -> Result<MazeEngine> {
    let lines = settings.map.lines()?;
    let (grid, markers) =
        Grid::parse(&lines).with_context(|| format!("Could not load {}", settings.map))?;

    let setup = MazeSetup::new(settings.start, settings.finish)
        .with_policy(settings.policy)
        .or_markers(markers);
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "Loaded {} with {} open cells, seed: {seed}",
        settings.map,
        grid.open_count()
    );
    log::debug!("Placement: {setup:?}");

    Ok(MazeEngine::new(grid, setup, seed))
}
