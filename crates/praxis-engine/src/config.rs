//! Configuration for the praxis shell.
//!
//! Settings live in a small JSON file. Every field has a default, so a
//! partial or missing file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::compose::DEFAULT_MAX_LENGTH;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".praxis/config.json";

/// Main configuration for praxis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Light or dark palette.
    #[serde(default)]
    pub color_scheme: ColorScheme,

    /// Artificial latency of the mock responder, in milliseconds.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// Maximum composer length, in characters.
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,

    /// How many UI ticks the "Copied to clipboard!" label stays visible.
    #[serde(default = "default_copy_feedback_ticks")]
    pub copy_feedback_ticks: u32,

    /// Where tracing output goes while the TUI owns the terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_response_delay_ms() -> u64 {
    2000
}

fn default_max_message_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_copy_feedback_ticks() -> u32 {
    // 2s at the 250ms tick rate
    8
}

/// Palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    /// The other scheme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Label for the home screen toggle.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Light Mode",
            Self::Light => "Dark Mode",
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults when the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Responder delay as a [`Duration`].
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            response_delay_ms: default_response_delay_ms(),
            max_message_length: default_max_message_length(),
            copy_feedback_ticks: default_copy_feedback_ticks(),
            log_file: None,
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
