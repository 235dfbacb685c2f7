//! # TitleBar Component
//!
//! Static chrome on the first screen row: key help plus the model that
//! answers submissions.
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives everything as props and
//! ignores input:
//!
//! ```rust,ignore
//! let title_bar = TitleBar::new("llama3.2".to_string());
//! title_bar.render(&mut surface, 2, 1);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Model known**: `"List view (Up/Down scroll, Enter open, q quit) | model: llama3.2"`
//! 2. **Default**: `"List view (Up/Down scroll, Enter open, q quit)"`

use std::io::Write;

use crate::term::Surface;
use crate::tui::component::Component;

const HELP: &str = "List view (Up/Down scroll, Enter open, q quit)";

/// Top line showing key help and the active model.
pub struct TitleBar {
    /// Model that answers submissions (e.g., "llama3.2")
    pub model_name: String,
}

impl TitleBar {
    pub fn new(model_name: String) -> Self {
        Self { model_name }
    }

    pub fn text(&self) -> String {
        if self.model_name.is_empty() {
            HELP.to_string()
        } else {
            format!("{HELP} | model: {}", self.model_name)
        }
    }
}

impl Component for TitleBar {
    fn render<W: Write>(&self, surface: &mut Surface<W>, col: u16, row: u16) {
        surface.move_to(col, row);
        surface.print(&self.text());
    }
}
