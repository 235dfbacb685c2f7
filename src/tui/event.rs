//! # Key Decoding
//!
//! Turns raw stdin bytes into [`Symbol`]s. Arrow keys arrive as three-byte
//! escape sequences, everything else as a single byte.
//!
//! ```text
//!            0x1B             '['
//!  Ground ─────────▶ Escape ───────▶ Csi ──'A'──▶ Up
//!    │                  │             ├───'B'──▶ Down
//!    │                  └─other─▶ Unknown └─other─▶ Unknown
//!    └─ 0x7F|0x08 ▶ Backspace, 0x0D ▶ Enter, 'q' ▶ Quit,
//!       0x20..=0x7E ▶ Char, other ▶ Unknown
//! ```
//!
//! Decoding never buffers ahead: each state reads exactly one more byte, so
//! a symbol costs one to three bytes. A lone ESC therefore waits for the
//! next key.

use std::io;

use crate::term::ByteSource;

const ESC: u8 = 0x1b;
const DEL: u8 = 0x7f;
const BS: u8 = 0x08;
const CR: u8 = 0x0d;

/// One decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Printable ASCII, `0x20..=0x7E` (except `q`).
    Char(u8),
    Backspace,
    Enter,
    Quit,
    Up,
    Down,
    /// Any other byte or a malformed escape sequence.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Ground,
    /// Saw ESC.
    Escape,
    /// Saw ESC `[`.
    Csi,
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue(DecodeState),
    Emit(Symbol),
}

fn step(state: DecodeState, byte: u8) -> Step {
    match (state, byte) {
        (DecodeState::Ground, ESC) => Step::Continue(DecodeState::Escape),
        (DecodeState::Ground, DEL | BS) => Step::Emit(Symbol::Backspace),
        (DecodeState::Ground, CR) => Step::Emit(Symbol::Enter),
        (DecodeState::Ground, b'q') => Step::Emit(Symbol::Quit),
        (DecodeState::Ground, 0x20..=0x7e) => Step::Emit(Symbol::Char(byte)),
        (DecodeState::Ground, _) => Step::Emit(Symbol::Unknown),

        (DecodeState::Escape, b'[') => Step::Continue(DecodeState::Csi),
        (DecodeState::Escape, _) => Step::Emit(Symbol::Unknown),

        (DecodeState::Csi, b'A') => Step::Emit(Symbol::Up),
        (DecodeState::Csi, b'B') => Step::Emit(Symbol::Down),
        (DecodeState::Csi, _) => Step::Emit(Symbol::Unknown),
    }
}

/// Block until one full symbol has been read from `source`.
///
/// A read error, including one in the middle of an escape sequence, is
/// returned as is.
pub fn read_symbol<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<Symbol> {
    let mut state = DecodeState::Ground;
    loop {
        let byte = source.read_byte()?;
        match step(state, byte) {
            Step::Continue(next) => state = next,
            Step::Emit(symbol) => {
                log::debug!("Decoded {:?} (last byte {:#04x})", symbol, byte);
                return Ok(symbol);
            }
        }
    }
}
