use crate::{Coords, TermInt};
use crate::snake::Direction;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, poll, read};

// Rows/columns between the screen edge and the play-field frame.
const FIELD_MARGIN: TermInt = 2;

pub enum InputEvent {
    Turn(Direction),
    Quit,
}

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        let (cols, rows) = terminal::size().expect("Error reading terminal size.");
        let width = cols.checked_sub(2 * FIELD_MARGIN + 2).expect("Terminal too small.");
        let height = rows.checked_sub(2 * FIELD_MARGIN + 2).expect("Terminal too small.");
        TermManager { width, height, stdout: stdout() }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    /// Interior play-field dimensions, excluding the margin and the frame.
    pub fn interior_size(&self) -> Coords {
        (self.width, self.height)
    }

    /// Non-blocking read of at most one key event. Arrow keys decode to a
    /// direction change, Ctrl+C to a quit request; everything else (and the
    /// common no-key case) is silently "no input".
    pub fn poll_input(&self) -> Option<InputEvent> {
        if !poll(Duration::from_millis(0)).expect("Error polling input.") {
            return None;
        }

        match read().expect("Error reading input.") {
            Event::Key(ev) if is_ctrl_c(&ev) => Some(InputEvent::Quit),
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Up => Some(InputEvent::Turn(Direction::Up)),
                KeyCode::Down => Some(InputEvent::Turn(Direction::Down)),
                KeyCode::Left => Some(InputEvent::Turn(Direction::Left)),
                KeyCode::Right => Some(InputEvent::Turn(Direction::Right)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Writes a single glyph at a play-field coordinate. The frame occupies
    /// coordinate 0 and `width + 1` / `height + 1`.
    pub fn draw_cell(&mut self, pos: Coords, ch: char) {
        let (x, y) = self.to_screen(pos);
        queue!(self.stdout, cursor::MoveTo(x, y), style::Print(ch)).unwrap();
    }

    pub fn draw_text(&mut self, pos: Coords, text: &str) {
        let (x, y) = self.to_screen(pos);
        queue!(self.stdout, cursor::MoveTo(x, y), style::Print(text)).unwrap();
    }

    /// Status line at a fixed position above the frame.
    pub fn draw_status(&mut self, text: &str) {
        queue!(self.stdout, cursor::MoveTo(1, 1), style::Print(text)).unwrap();
    }

    pub fn draw_border(&mut self, width: TermInt, height: TermInt) {
        let right = width + 1;
        let bottom = height + 1;

        self.draw_cell((0, 0), '┌');
        self.draw_cell((right, 0), '┐');
        self.draw_cell((0, bottom), '└');
        self.draw_cell((right, bottom), '┘');

        for x in 1..right {
            self.draw_cell((x, 0), '─');
            self.draw_cell((x, bottom), '─');
        }

        for y in 1..bottom {
            self.draw_cell((0, y), '│');
            self.draw_cell((right, y), '│');
        }
    }

    pub fn clear(&mut self) {
        queue!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn to_screen(&self, pos: Coords) -> Coords {
        (pos.0 + FIELD_MARGIN, pos.1 + FIELD_MARGIN)
    }

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
