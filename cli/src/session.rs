use anyhow::Result;
use mazerun_core::{MazeEngine, MoveOutcome, Placer};

use crate::present::{Frame, Intent, Presenter};

/// Drives `engine` with `presenter` until the player quits.
///
/// Each round shows the maze, asks for an intent and applies it. Rejected
/// moves are logged and the player is asked again.
pub fn run<P, V>(engine: &mut MazeEngine<P>, presenter: &mut V) -> Result<()>
where
    P: Placer,
    V: Presenter + ?Sized,
{
    loop {
        let moves = engine.available_moves();
        let frame = Frame::new(engine, &moves);
        presenter.present(&frame)?;

        match presenter.next_intent(&frame)? {
            Intent::Quit => {
                log::info!("Player quit at {:?}", engine.current_pos());
                return Ok(());
            }
            Intent::Restart => engine.restart(),
            Intent::Move(direction) => match engine.apply_move(direction) {
                Ok(MoveOutcome::Solved) => log::info!("Solved at {:?}", engine.current_pos()),
                Ok(MoveOutcome::Moved) => {}
                Err(err) => log::warn!("{err}"),
            },
        }
    }
}
