//! # ListView Component
//!
//! Fixed-height scrolling window over the list of replies.
//!
//! ## State
//!
//! - `items`: every entry, in the order it was appended
//! - `selected`: index of the highlighted entry
//! - `scroll_offset`: index of the first visible entry
//!
//! Navigation keeps `scroll_offset <= selected < scroll_offset + height`,
//! moving the window one row at a time when the selection would leave it.
//! Appending never moves the selection or the window.
//!
//! `selected` is stored as a plain index that starts at 0, so the first
//! entry appended to an empty list becomes the selection. Use
//! [`ListView::selected`] to read it: it is `None` while the list is empty.

use std::io::Write;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::term::Surface;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::Symbol;

/// Column budget for an entry's text, not counting the selection marker.
pub const MAX_ITEM_WIDTH: usize = 90;

const FILLER: &str = "~";
const SELECTED_MARKER: &str = "> ";
const PLAIN_MARKER: &str = "  ";
const ELLIPSIS: char = '…';

/// High-level events emitted by the ListView
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// Selection moved to the given index.
    SelectionMoved(usize),
}

#[derive(Debug)]
pub struct ListView {
    items: Vec<String>,
    selected: usize,
    scroll_offset: usize,
    height: usize,
}

impl ListView {
    /// `height` is the number of visible rows; zero is bumped to one.
    pub fn new(height: usize) -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            scroll_offset: 0,
            height: height.max(1),
        }
    }

    pub fn with_items(height: usize, items: Vec<String>) -> Self {
        Self {
            items,
            ..Self::new(height)
        }
    }

    pub fn append(&mut self, text: String) {
        self.items.push(text);
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Index of the highlighted entry, `None` for an empty list.
    pub fn selected(&self) -> Option<usize> {
        (self.selected < self.items.len()).then_some(self.selected)
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected().map(|i| self.items[i].as_str())
    }

    /// The text of each visible row, top to bottom, markers included.
    pub fn visible_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                let pos = self.scroll_offset + row;
                match self.items.get(pos) {
                    None => FILLER.to_string(),
                    Some(item) => {
                        let marker = if pos == self.selected {
                            SELECTED_MARKER
                        } else {
                            PLAIN_MARKER
                        };
                        format!("{marker}{}", clip_to_width(item, MAX_ITEM_WIDTH))
                    }
                }
            })
            .collect()
    }

    fn move_up(&mut self) -> bool {
        if self.selected == 0 || self.items.is_empty() {
            return false;
        }
        self.selected -= 1;
        if self.selected < self.scroll_offset {
            self.scroll_offset -= 1;
        }
        true
    }

    fn move_down(&mut self) -> bool {
        if self.selected + 1 >= self.items.len() {
            return false;
        }
        self.selected += 1;
        if self.selected >= self.scroll_offset + self.height {
            self.scroll_offset += 1;
        }
        true
    }
}

impl Component for ListView {
    fn render<W: Write>(&self, surface: &mut Surface<W>, col: u16, row: u16) {
        for (i, line) in self.visible_rows().iter().enumerate() {
            let Some(y) = u16::try_from(i).ok().and_then(|i| row.checked_add(i)) else {
                break;
            };
            surface.move_to(col, y);
            surface.print(line);
        }
    }
}

impl EventHandler for ListView {
    type Event = ListEvent;

    fn handle_event(&mut self, symbol: &Symbol) -> Option<Self::Event> {
        let moved = match symbol {
            Symbol::Up => self.move_up(),
            Symbol::Down => self.move_down(),
            _ => false,
        };
        moved.then_some(ListEvent::SelectionMoved(self.selected))
    }
}

/// Fit `text` on one row of at most `budget` columns.
///
/// Control characters (newlines, tabs) become spaces. Text that does not
/// fit is cut and ends in a single `…`, which counts against the budget.
pub fn clip_to_width(text: &str, budget: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if flat.width() <= budget {
        return flat;
    }
    if budget == 0 {
        return String::new();
    }

    let room = budget - 1;
    let mut used = 0;
    let mut clipped = String::new();
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > room {
            break;
        }
        used += w;
        clipped.push(c);
    }
    clipped.push(ELLIPSIS);
    clipped
}
