//! Cursor-addressed paint primitives.
//!
//! Commands are queued with crossterm and only reach the terminal on
//! [`Surface::flush`]. Write errors are swallowed: a frame that fails to
//! paint is simply repainted on the next keystroke.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use super::PlatformBackend;

/// Full terminal reset (RIS). Also drops the scrollback association on
/// terminals that keep one per screen.
const RESET: &str = "\x1bc";

pub struct Surface<W: Write> {
    out: W,
    backend: PlatformBackend,
    cursor_hidden: bool,
}

impl Surface<io::Stdout> {
    pub fn stdout(backend: PlatformBackend) -> Self {
        Self::new(io::stdout(), backend)
    }
}

impl<W: Write> Surface<W> {
    pub fn new(out: W, backend: PlatformBackend) -> Self {
        Self {
            out,
            backend,
            cursor_hidden: false,
        }
    }

    /// Erase the screen and home the cursor.
    pub fn clear(&mut self) {
        if self.backend.needs_full_reset() {
            let _ = queue!(self.out, Print(RESET));
        }
        let _ = queue!(self.out, MoveTo(0, 0), Clear(ClearType::All));
    }

    /// Position the cursor. Both coordinates are 1-based, like the
    /// terminal's own `CSI row;col H`.
    pub fn move_to(&mut self, col: u16, row: u16) {
        let _ = queue!(
            self.out,
            MoveTo(col.saturating_sub(1), row.saturating_sub(1))
        );
    }

    pub fn print(&mut self, text: &str) {
        let _ = queue!(self.out, Print(text));
    }

    pub fn hide_cursor(&mut self) {
        let _ = queue!(self.out, Hide);
        self.cursor_hidden = true;
    }

    pub fn show_cursor(&mut self) {
        let _ = queue!(self.out, Show);
        self.cursor_hidden = false;
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Drop for Surface<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            self.show_cursor();
        }
        self.flush();
    }
}
