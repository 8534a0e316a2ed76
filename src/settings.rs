//! Display settings for a game session.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// User-configurable console settings.
///
/// Every field has a default, so an empty TOML file (or no file at all)
/// yields the stock console behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct GameSettings {
    /// Clear the terminal before each render.
    clear_screen: bool,

    /// Color the marks on the board.
    color: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: false,
        }
    }
}

impl GameSettings {
    /// Creates settings with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read settings file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let settings = Self::from_toml_str(&content)?;
        info!(?settings, "Settings loaded");
        Ok(settings)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_console_behavior() {
        let settings = GameSettings::new();
        assert!(*settings.clear_screen());
        assert!(!*settings.color());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = GameSettings::from_toml_str("").unwrap();
        assert_eq!(settings, GameSettings::default());
    }

    #[test]
    fn test_partial_toml() {
        let settings = GameSettings::from_toml_str("color = true").unwrap();
        assert!(*settings.color());
        assert!(*settings.clear_screen());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = GameSettings::from_toml_str("board_size = 4").unwrap_err();
        assert!(err.message.contains("Failed to parse settings"));
    }

    #[test]
    fn test_setters_override() {
        let settings = GameSettings::new().with_clear_screen(false).with_color(true);
        assert!(!*settings.clear_screen());
        assert!(*settings.color());
    }
}
