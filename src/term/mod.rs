//! # Terminal Layer
//!
//! Device-level terminal control: raw mode, blocking byte reads, and
//! cursor-addressed output.
//!
//! ```text
//! PlatformBackend ──▶ TerminalSession   (termios capture / restore, read_byte)
//!        │
//!        └──────────▶ Surface<W>        (clear, move_to, cursor visibility)
//! ```
//!
//! Platform differences live in [`PlatformBackend`] and nowhere else. The
//! widgets and the event loop only ever talk to a `Surface` and a
//! [`ByteSource`].

pub mod session;
pub mod surface;

pub use session::{TerminalMode, TerminalSession};
pub use surface::Surface;

/// The platform family we are driving, selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformBackend {
    /// macOS and the BSDs. Clearing needs a full terminal reset first.
    PosixBsd,
    /// Linux and other termios platforms.
    PosixLinux,
    /// No controllable raw mode (e.g. Windows consoles).
    Unsupported,
}

impl PlatformBackend {
    /// Picks the backend for the platform this binary was compiled for.
    pub fn detect() -> Self {
        if cfg!(not(unix)) {
            PlatformBackend::Unsupported
        } else if cfg!(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        )) {
            PlatformBackend::PosixBsd
        } else {
            PlatformBackend::PosixLinux
        }
    }

    pub fn supports_raw_mode(self) -> bool {
        !matches!(self, PlatformBackend::Unsupported)
    }

    /// Whether `clear()` must reset the terminal (`ESC c`) before erasing.
    pub fn needs_full_reset(self) -> bool {
        matches!(self, PlatformBackend::PosixBsd)
    }
}

/// Anything that can hand out input one byte at a time, blocking until it can.
pub trait ByteSource {
    fn read_byte(&mut self) -> std::io::Result<u8>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_matches_compile_target() {
        let backend = PlatformBackend::detect();
        if cfg!(unix) {
            assert!(backend.supports_raw_mode());
        } else {
            assert_eq!(backend, PlatformBackend::Unsupported);
        }
    }

    #[test]
    fn test_only_bsd_needs_full_reset() {
        assert!(PlatformBackend::PosixBsd.needs_full_reset());
        assert!(!PlatformBackend::PosixLinux.needs_full_reset());
        assert!(!PlatformBackend::Unsupported.needs_full_reset());
    }

    #[test]
    fn test_unsupported_has_no_raw_mode() {
        assert!(!PlatformBackend::Unsupported.supports_raw_mode());
    }
}
