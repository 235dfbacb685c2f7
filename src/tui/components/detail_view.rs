//! # DetailView Component
//!
//! Full-screen pager for one list entry. Paints the entry one source line
//! per row, leaves the last two rows for a gap and the footer, and is
//! dismissed by any key. The caller does the waiting and the redraw after.

use std::io::Write;

use crate::term::Surface;
use crate::tui::component::Component;

pub const FOOTER: &str = "Press any key to return";

/// Rows assumed when the terminal cannot report its size.
pub const FALLBACK_ROWS: u16 = 24;

pub struct DetailView<'a> {
    /// Entry text; `\n` separates screen rows
    pub text: &'a str,
    /// Terminal height in rows
    pub rows: u16,
}

impl<'a> DetailView<'a> {
    pub fn new(text: &'a str, rows: u16) -> Self {
        Self { text, rows }
    }

    /// The source lines that fit, in order.
    pub fn visible_lines(&self) -> Vec<&'a str> {
        let max = usize::from(self.rows.saturating_sub(2));
        self.text.split('\n').take(max).collect()
    }
}

impl Component for DetailView<'_> {
    fn render<W: Write>(&self, surface: &mut Surface<W>, col: u16, row: u16) {
        surface.clear();
        for (i, line) in self.visible_lines().iter().enumerate() {
            let Some(y) = u16::try_from(i).ok().and_then(|i| row.checked_add(i)) else {
                break;
            };
            surface.move_to(col, y);
            surface.print(line);
        }
        surface.move_to(col, self.rows);
        surface.print(FOOTER);
    }
}

/// Current terminal height, or [`FALLBACK_ROWS`].
pub fn terminal_rows() -> u16 {
    match crossterm::terminal::size() {
        Ok((_, rows)) if rows > 0 => rows,
        _ => FALLBACK_ROWS,
    }
}
