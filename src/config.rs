//! User configuration loaded from `~/.config/speakcalc/config.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub speech: SpeechConfig,
}

/// The external program used to speak.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    pub program: String,
    /// Arguments placed before the utterance.
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "espeak-ng".to_string(),
            args: Vec::new(),
        }
    }
}

/// Default location of the config file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("speakcalc").join("config.toml"))
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
