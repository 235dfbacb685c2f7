//! # Terminal Session
//!
//! Owns the terminal's original attributes for the life of the process.
//!
//! `enter_raw()` snapshots stdin's termios and switches it to byte-at-a-time
//! input; dropping the session (normal return, `?` propagation, or panic
//! unwinding) puts the snapshot back. SIGINT, SIGTERM and SIGHUP get the
//! same treatment through [`TerminalSession::install_interrupt_restore`],
//! since their default actions kill the process without unwinding.
//!
//! Raw here is deliberately narrower than `cfmakeraw`:
//!
//! - `ICANON`, `ECHO` off: no line buffering, no local echo
//! - `ICRNL`, `IXON` off: Enter arrives as `\r`, Ctrl+S/Ctrl+Q reach us
//! - `VMIN = 1`, `VTIME = 0`: `read` blocks for exactly one byte
//!
//! `ISIG` and `OPOST` are untouched, so Ctrl+C still raises SIGINT and
//! `\n` on output still returns the carriage.

use std::io::{self, Read};

use log::{debug, info, warn};

use super::{ByteSource, PlatformBackend};

/// Snapshot of the terminal's attributes before we touched them.
#[derive(Debug, Clone)]
pub enum TerminalMode {
    #[cfg(unix)]
    Captured(nix::sys::termios::Termios),
    /// Nothing was changed, so there is nothing to restore.
    Unsupported,
}

pub struct TerminalSession {
    backend: PlatformBackend,
    /// `None` once restored.
    previous: Option<TerminalMode>,
}

impl TerminalSession {
    /// Switch stdin to raw mode, remembering how it was.
    ///
    /// Never fails: if the backend has no raw mode, or stdin is not a
    /// terminal, the session holds [`TerminalMode::Unsupported`] and
    /// [`is_raw`](Self::is_raw) reports `false`.
    pub fn enter_raw(backend: PlatformBackend) -> Self {
        let previous = if backend.supports_raw_mode() {
            capture_and_make_raw()
        } else {
            info!("Platform backend {:?} has no raw mode", backend);
            TerminalMode::Unsupported
        };

        Self {
            backend,
            previous: Some(previous),
        }
    }

    pub fn backend(&self) -> PlatformBackend {
        self.backend
    }

    pub fn is_raw(&self) -> bool {
        !matches!(self.previous, Some(TerminalMode::Unsupported) | None)
    }

    /// Put the original attributes back. Only the first call does anything.
    pub fn restore(&mut self) {
        match self.previous.take() {
            #[cfg(unix)]
            Some(TerminalMode::Captured(original)) => posix::apply(&original),
            Some(TerminalMode::Unsupported) => {}
            None => debug!("Terminal already restored"),
        }
    }

    /// Restore the terminal and exit with status 130 on SIGINT, SIGTERM or
    /// SIGHUP.
    ///
    /// The handler runs on its own thread while the event loop is parked in
    /// `read`, so it works from a clone of the snapshot.
    pub fn install_interrupt_restore(&self) {
        #[cfg(unix)]
        if let Some(TerminalMode::Captured(original)) = &self.previous {
            let original = original.clone();
            let result = ctrlc::set_handler(move || {
                posix::apply(&original);
                let _ = crossterm::execute!(io::stdout(), crossterm::cursor::Show);
                std::process::exit(130);
            });
            if let Err(e) = result {
                warn!("Failed to install termination signal handler: {}", e);
            }
        }
    }

    /// Block until one byte arrives on stdin. EOF is reported as an error.
    pub fn read_byte(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        io::stdin().lock().read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

impl ByteSource for TerminalSession {
    fn read_byte(&mut self) -> io::Result<u8> {
        TerminalSession::read_byte(self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(unix)]
fn capture_and_make_raw() -> TerminalMode {
    match posix::make_raw() {
        Ok(original) => {
            info!("Terminal switched to raw mode");
            TerminalMode::Captured(original)
        }
        Err(e) => {
            warn!("Could not enter raw mode: {}", e);
            TerminalMode::Unsupported
        }
    }
}

#[cfg(not(unix))]
fn capture_and_make_raw() -> TerminalMode {
    TerminalMode::Unsupported
}

#[cfg(unix)]
mod posix {
    use std::io;
    use std::os::fd::AsFd;

    use log::warn;
    use nix::sys::termios::{
        InputFlags, LocalFlags, SetArg, SpecialCharacterIndices, Termios, tcgetattr, tcsetattr,
    };

    /// Attributes for byte-at-a-time input derived from `original`.
    pub(super) fn raw_attributes(original: &Termios) -> Termios {
        let mut raw = original.clone();
        raw.local_flags.remove(LocalFlags::ICANON | LocalFlags::ECHO);
        raw.input_flags.remove(InputFlags::ICRNL | InputFlags::IXON);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
        raw
    }

    /// Returns the attributes that were active before the switch.
    pub(super) fn make_raw() -> io::Result<Termios> {
        let original = tcgetattr(io::stdin().as_fd()).map_err(io::Error::from)?;
        let raw = raw_attributes(&original);
        tcsetattr(io::stdin().as_fd(), SetArg::TCSANOW, &raw).map_err(io::Error::from)?;
        Ok(original)
    }

    pub(super) fn apply(original: &Termios) {
        if let Err(e) = tcsetattr(io::stdin().as_fd(), SetArg::TCSANOW, original) {
            warn!("Failed to restore terminal mode: {}", e);
        }
    }
}
