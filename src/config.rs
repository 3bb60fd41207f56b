//! Configuration persistence for the word card viewer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration that persists between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Render cards with the dark palette.
    #[serde(default)]
    pub dark_mode: bool,

    /// Words file produced by the search layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_file: Option<PathBuf>,
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordcard")
            .join("config.toml")
    }

    /// Load config from disk, returning default if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load config for an interactive session. Returns the path changes may
    /// be saved to: `None` when an existing file could not be read, so that
    /// it is never overwritten with defaults.
    pub fn load_for_session(path: &Path) -> (Self, Option<PathBuf>) {
        match Self::load_from(path) {
            Ok(config) => (config, Some(path.to_path_buf())),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable config, changes will not be saved");
                (Self::default(), None)
            }
        }
    }

    /// Save config to disk, creating the directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        tracing::debug!(?path, "config saved");
        Ok(())
    }
}
