//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: key help and model name
//! - `DetailView`: full-screen view of one entry
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ListView`: scrollable window over the replies
//! - `InputLine`: the prompt being typed
//!
//! Each component file holds its state, its event type, its rendering and
//! its tests. Components never touch the terminal directly; they paint
//! through a `Surface` handed in by the caller, so tests render into a
//! `Vec<u8>`.

pub mod detail_view;
pub mod input_line;
pub mod list_view;
mod title_bar;

pub use detail_view::DetailView;
pub use input_line::{InputEvent, InputLine};
pub use list_view::{ListEvent, ListView};
pub use title_bar::TitleBar;
