//! # InputLine Component
//!
//! Single-line prompt editor. Typing appends, Backspace removes from the
//! end, Enter asks the parent to submit.
//!
//! The buffer is not cleared on submit. The parent reads [`InputLine::text`],
//! does its work, then calls [`InputLine::clear`], so it decides whether the
//! text disappears before or after the reply arrives.

use std::io::Write;

use crate::term::Surface;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::Symbol;

const LABEL: &str = "Input: ";

/// High-level events emitted by the InputLine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Enter pressed with a non-empty buffer.
    Submit,
    /// Buffer changed.
    ContentChanged,
}

#[derive(Debug, Default)]
pub struct InputLine {
    buffer: String,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Component for InputLine {
    fn render<W: Write>(&self, surface: &mut Surface<W>, col: u16, row: u16) {
        surface.move_to(col, row);
        surface.print(LABEL);
        surface.print(&self.buffer);
    }
}

impl EventHandler for InputLine {
    type Event = InputEvent;

    fn handle_event(&mut self, symbol: &Symbol) -> Option<Self::Event> {
        match symbol {
            Symbol::Char(c) => {
                self.buffer.push(char::from(*c));
                Some(InputEvent::ContentChanged)
            }
            Symbol::Backspace => self.buffer.pop().map(|_| InputEvent::ContentChanged),
            Symbol::Enter => (!self.buffer.is_empty()).then_some(InputEvent::Submit),
            _ => None,
        }
    }
}
