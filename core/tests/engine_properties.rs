//! Engine properties over generated grids, plus the fixed regression mazes.

use mazerun_core::{Cell, Direction, Grid, MazeEngine, MazeError, MazeSetup, MoveOutcome};
use proptest::prelude::*;

/// Ragged maze text with at least one open cell somewhere.
fn maze_text() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[x ]{0,7}", 1..7).prop_filter("needs an open cell", |rows| {
        rows.iter().any(|row| row.contains(' '))
    })
}

fn reference_target(
    grid: &Grid,
    (row, col): (usize, usize),
    direction: Direction,
) -> Option<(usize, usize)> {
    let (d_row, d_col) = direction.delta();
    let row = row.checked_add_signed(d_row)?;
    let col = col.checked_add_signed(d_col)?;
    grid.get((row, col)).map(|_| (row, col))
}

proptest! {
    #[test]
    fn available_moves_are_exactly_the_in_bounds_open_neighbours(rows in maze_text()) {
        let grid = Grid::from_definition(&rows).unwrap();

        for coords in grid.open_cells() {
            let moves = grid.available_moves(coords);
            for direction in Direction::ALL {
                let legal = reference_target(&grid, coords, direction)
                    .is_some_and(|target| grid[target] == Cell::Open);
                prop_assert_eq!(moves.contains(&direction), legal);
            }
        }
    }

    #[test]
    fn random_placement_lands_on_open_cells(rows in maze_text(), seed in any::<u64>()) {
        let grid = Grid::from_definition(&rows).unwrap();
        let mut engine = MazeEngine::new(grid, MazeSetup::default(), seed);

        for _ in 0..5 {
            prop_assert!(engine.grid().is_open(engine.current_pos()));
            prop_assert!(engine.grid().is_open(engine.finish_pos()));
            engine.restart();
        }
    }

    #[test]
    fn rejected_moves_change_nothing(rows in maze_text(), seed in any::<u64>()) {
        let grid = Grid::from_definition(&rows).unwrap();
        let mut engine = MazeEngine::new(grid, MazeSetup::default(), seed);
        let before = (engine.current_pos(), engine.finish_pos(), engine.is_solved());
        let moves = engine.available_moves();

        for direction in Direction::ALL.into_iter().filter(|d| !moves.contains(d)) {
            let is_illegal = matches!(
                engine.apply_move(direction),
                Err(MazeError::IllegalMove { .. })
            );
            prop_assert!(is_illegal);
            prop_assert_eq!((engine.current_pos(), engine.finish_pos(), engine.is_solved()), before);
        }
    }
}

#[test]
fn hinted_sample_maze() {
    let grid = Grid::from_definition(["  x  ", "x   x", "  xx "]).unwrap();
    let engine = MazeEngine::new(grid, MazeSetup::new(Some((0, 0)), Some((0, 1))), 5);

    assert_eq!(engine.current_pos(), (0, 0));
    assert_eq!(engine.finish_pos(), (0, 1));
    assert!(!engine.is_solved());
    // (1, 0) is a wall, so east is the only way out of the corner.
    assert_eq!(engine.available_moves().as_slice(), &[Direction::East][..]);
}

#[test]
fn walking_the_sample_maze_to_the_finish() {
    let (grid, markers) =
        Grid::parse(["  x   ", "x   x ", "  xx  ", " x  xx", "  x   ", "x   x$"]).unwrap();
    let setup = MazeSetup::new(Some((0, 0)), None).or_markers(markers);
    let mut engine = MazeEngine::new(grid, setup, 0);
    assert_eq!(engine.finish_pos(), (5, 5));

    use Direction::*;
    let path = [
        East, South, South, West, South, South, East, South, East, East, North, East, East, South,
    ];
    let (last, steps) = path.split_last().unwrap();
    for &direction in steps {
        assert_eq!(engine.apply_move(direction), Ok(MoveOutcome::Moved));
    }
    assert_eq!(engine.apply_move(*last), Ok(MoveOutcome::Solved));
    assert!(engine.is_solved());
}

#[test]
fn single_open_cell_without_hints_starts_solved() {
    let grid = Grid::from_definition(["xxx", "x x", "xxx"]).unwrap();

    for seed in 0..10 {
        let mut engine = MazeEngine::new(grid.clone(), MazeSetup::default(), seed);
        assert_eq!(engine.current_pos(), engine.finish_pos());
        assert!(engine.is_solved());
        engine.restart();
        assert!(engine.is_solved());
    }
}
