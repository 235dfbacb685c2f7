//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quill/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! With no file, no env vars and no flags the defaults below apply.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::inference::providers::ollama::DEFAULT_OLLAMA_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub model: Option<String>,
    pub list_height: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OllamaConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MODEL: &str = "llama3.2";
pub const DEFAULT_LIST_HEIGHT: usize = 8;
/// Tallest list window accepted from the config file.
pub const MAX_LIST_HEIGHT: usize = 500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub model_name: String,
    pub ollama_base_url: String,
    pub list_height: usize,
}

/// Values picked up from the environment (or `.env`).
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub model: Option<String>,
    pub ollama_base_url: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            model: std::env::var("QUILL_MODEL").ok(),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL").ok(),
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub model: Option<&'a str>,
    pub ollama_base_url: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quill/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quill").join("config.toml"))
}

/// Load config from `~/.quill/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuillConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuillConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuillConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<QuillConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(QuillConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuillConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Quill Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# model = "llama3.2"                 # Or set QUILL_MODEL, or pass --model
# list_height = 8                    # Visible rows in the reply list (1-500)

# [ollama]
# base_url = "http://localhost:11434"  # Or set OLLAMA_BASE_URL, or pass --base-url
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuillConfig, env: &EnvOverrides, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Model: CLI → env → config → default
    let model_name = cli
        .model
        .map(|s| s.to_string())
        .or_else(|| env.model.clone())
        .or_else(|| config.general.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // Ollama base URL: CLI → env → config → default
    let ollama_base_url = cli
        .ollama_base_url
        .map(|s| s.to_string())
        .or_else(|| env.ollama_base_url.clone())
        .or_else(|| config.ollama.base_url.clone())
        .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string());

    let list_height = config
        .general
        .list_height
        .unwrap_or(DEFAULT_LIST_HEIGHT)
        .clamp(1, MAX_LIST_HEIGHT);

    ResolvedConfig {
        model_name,
        ollama_base_url,
        list_height,
    }
}
