//! # Core
//!
//! Settings that know nothing about the terminal.
//!
//! - [`config`]: config file, env and CLI resolution into `ResolvedConfig`

pub mod config;
