use std::io::{self, BufRead, Stdout, Write};

use anyhow::Result;

use super::*;

/// Line-based front end: prints the maze and reads one command per line.
#[derive(Debug)]
pub struct ConsolePresenter<R, W> {
    input: R,
    output: W,
}

impl ConsolePresenter<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows `prompt` and reads a trimmed line, `None` once input is closed.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    fn ask_direction(&mut self, frame: &Frame<'_>) -> Result<Intent> {
        let letters: Vec<String> = frame.moves.iter().map(|d| d.letter().to_string()).collect();
        let prompt = format!("\nChoose a direction ({}) or quit: ", letters.join(","));

        loop {
            let Some(answer) = self.ask(&prompt)? else {
                return Ok(Intent::Quit);
            };
            match answer.as_str() {
                "quit" | "q" => return Ok(Intent::Quit),
                "restart" => return Ok(Intent::Restart),
                _ => {}
            }
            match parse_direction(&answer) {
                Some(direction) if frame.allows(direction) => return Ok(Intent::Move(direction)),
                _ => log::debug!("Ignoring console input {answer:?}"),
            }
        }
    }

    fn ask_replay(&mut self) -> Result<Intent> {
        loop {
            match self.ask("Play again? (y, n): ")?.as_deref() {
                None | Some("n") => return Ok(Intent::Quit),
                Some("y") => return Ok(Intent::Restart),
                Some(_) => {}
            }
        }
    }
}

impl<R: BufRead, W: Write> Presenter for ConsolePresenter<R, W> {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        writeln!(self.output)?;
        for (row, cells) in frame.grid.rows().enumerate() {
            let line: Vec<String> = (0..cells.len())
                .map(|col| frame.glyph_at((row, col)).to_string())
                .collect();
            writeln!(self.output, "{}", line.join(" "))?;
        }

        if frame.solved {
            writeln!(self.output, "\nCongratulations! You made it to the finish!")?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn next_intent(&mut self, frame: &Frame<'_>) -> Result<Intent> {
        if frame.solved {
            self.ask_replay()
        } else {
            self.ask_direction(frame)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use mazerun_core::{Grid, MazeEngine, MazeSetup};

    use super::*;

    fn engine() -> MazeEngine {
        let grid = Grid::from_definition(["  x", "x  "]).unwrap();
        MazeEngine::new(grid, MazeSetup::new(Some((0, 0)), Some((1, 2))), 0)
    }

    fn presenter(input: &str) -> ConsolePresenter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePresenter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(presenter: ConsolePresenter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(presenter.into_output()).unwrap()
    }

    #[test]
    fn draws_cells_separated_by_spaces() {
        let engine = engine();
        let moves = engine.available_moves();
        let mut presenter = presenter("");

        presenter.present(&Frame::new(&engine, &moves)).unwrap();

        assert_eq!(output(presenter), "\n@   x\nx   $\n");
    }

    #[test]
    fn reprompts_until_a_legal_direction() {
        let engine = engine();
        let moves = engine.available_moves();
        let mut presenter = presenter("s\nup\nE\n");

        let intent = presenter.next_intent(&Frame::new(&engine, &moves)).unwrap();

        assert_eq!(intent, Intent::Move(Direction::East));
        let output = output(presenter);
        assert_eq!(output.matches("Choose a direction (e) or quit: ").count(), 3);
    }

    #[test]
    fn quit_and_end_of_input_both_stop() {
        let engine = engine();
        let moves = engine.available_moves();
        let frame = Frame::new(&engine, &moves);

        assert_eq!(presenter("quit\n").next_intent(&frame).unwrap(), Intent::Quit);
        assert_eq!(presenter("").next_intent(&frame).unwrap(), Intent::Quit);
        assert_eq!(presenter("restart\n").next_intent(&frame).unwrap(), Intent::Restart);
    }

    #[test]
    fn solved_frame_asks_to_play_again() {
        let mut engine = engine();
        engine.apply_move(Direction::East).unwrap();
        engine.apply_move(Direction::South).unwrap();
        engine.apply_move(Direction::East).unwrap();
        assert!(engine.is_solved());

        let moves = engine.available_moves();
        let frame = Frame::new(&engine, &moves);
        let mut presenter = presenter("maybe\ny\n");
        presenter.present(&frame).unwrap();

        assert_eq!(presenter.next_intent(&frame).unwrap(), Intent::Restart);
        let output = output(presenter);
        assert!(output.contains("Congratulations! You made it to the finish!"));
        assert_eq!(output.matches("Play again? (y, n): ").count(), 2);

        assert_eq!(self::presenter("n\n").next_intent(&frame).unwrap(), Intent::Quit);
    }
}
