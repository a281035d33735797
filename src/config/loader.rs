use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::WidgetSettings;

/// Errors that can occur when loading widget settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl WidgetSettings {
    /// Returns the path to the settings file.
    ///
    /// Uses `~/.config/trace-widgets/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("trace-widgets").join("config.toml")
    }

    /// Loads settings from the default settings file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads settings from `path`.
    ///
    /// - If the file doesn't exist, returns `WidgetSettings::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(WidgetSettings::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings: WidgetSettings =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings.
    ///
    /// Checks:
    /// - Button labels and the confirmation text are non-empty
    /// - Every layout metric is a positive finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        let texts = [
            ("confirmation", &self.confirmation),
            ("labels.submit", &self.labels.submit),
            ("labels.submitted", &self.labels.submitted),
        ];
        for (name, value) in texts {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("'{}' must not be empty", name),
                });
            }
        }

        let layout = &self.layout;
        let metrics = [
            ("layout.container_width", layout.container_width),
            ("layout.char_width", layout.char_width),
            ("layout.item_padding", layout.item_padding),
            ("layout.min_item_width", layout.min_item_width),
            ("layout.slot_width", layout.slot_width),
            ("layout.item_height", layout.item_height),
            ("layout.gap", layout.gap),
        ];
        for (name, value) in metrics {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError {
                    message: format!("'{}' must be a positive number, got {}", name, value),
                });
            }
        }

        Ok(())
    }
}
