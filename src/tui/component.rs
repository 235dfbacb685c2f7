use std::io::Write;

use crate::term::Surface;
use crate::tui::event::Symbol;

/// A reusable UI component.
///
/// Components paint themselves at a fixed, 1-based screen origin. Geometry
/// beyond the origin (height, column budget) is fixed when the component is
/// built, so render needs nothing else from the caller.
pub trait Component {
    /// Paint the component with its top-left corner at (`col`, `row`).
    fn render<W: Write>(&self, surface: &mut Surface<W>, col: u16, row: u16);
}

/// A component that reacts to decoded keystrokes.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle one `Symbol` and optionally return a high-level event.
    fn handle_event(&mut self, symbol: &Symbol) -> Option<Self::Event>;
}
