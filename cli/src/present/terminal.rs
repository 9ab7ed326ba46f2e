use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use mazerun_core::{Cell, FINISH_GLYPH, PLAYER_GLYPH};

use super::*;

const WALL: char = '█';

/// Full-screen front end. Owns the terminal for as long as it lives and
/// puts it back the way it was on drop.
pub struct TerminalPresenter {
    out: Stdout,
}

impl TerminalPresenter {
    pub fn stdout() -> Result<Self> {
        let mut out = io::stdout();
        enable_raw_mode()?;
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self { out })
    }

    fn status_line(frame: &Frame<'_>) -> &'static str {
        if frame.solved {
            "You made it to the finish! Play again? (y/n)"
        } else {
            "arrows/wasd/hjkl move, r restart, q quit"
        }
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        let mut last_row = 0;
        for (row, cells) in frame.grid.rows().enumerate() {
            let y = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, y))?;
            for (col, &cell) in cells.iter().enumerate() {
                let (color, glyph) = match frame.glyph_at((row, col)) {
                    PLAYER_GLYPH => (Color::Yellow, PLAYER_GLYPH),
                    FINISH_GLYPH => (Color::Green, FINISH_GLYPH),
                    _ if cell == Cell::Wall => (Color::DarkGrey, WALL),
                    _ => (Color::Reset, ' '),
                };
                queue!(self.out, SetForegroundColor(color), Print(glyph))?;
            }
            last_row = y;
        }

        queue!(
            self.out,
            ResetColor,
            MoveTo(0, last_row.saturating_add(2)),
            Print(Self::status_line(frame)),
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn next_intent(&mut self, frame: &Frame<'_>) -> Result<Intent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(intent) = intent_for_key(key, frame) {
                        return Ok(intent);
                    }
                    log::trace!("Ignoring key {key:?}");
                }
                Event::Resize(..) => self.present(frame)?,
                _ => {}
            }
        }
    }
}

/// Maps a key press to an intent. Directions that are not legal from the
/// current frame are swallowed here.
pub fn intent_for_key(key: KeyEvent, frame: &Frame<'_>) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Intent::Quit);
    }

    if frame.solved {
        return match key.code {
            KeyCode::Char('y' | 'r') | KeyCode::Enter => Some(Intent::Restart),
            KeyCode::Char('n' | 'q') | KeyCode::Esc => Some(Intent::Quit),
            _ => None,
        };
    }

    let direction = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Intent::Quit),
        KeyCode::Char('r') => return Some(Intent::Restart),
        KeyCode::Up | KeyCode::Char('w' | 'k') => Direction::North,
        KeyCode::Down | KeyCode::Char('s' | 'j') => Direction::South,
        KeyCode::Left | KeyCode::Char('a' | 'h') => Direction::West,
        KeyCode::Right | KeyCode::Char('d' | 'l') => Direction::East,
        _ => return None,
    };
    frame.allows(direction).then_some(Intent::Move(direction))
}
