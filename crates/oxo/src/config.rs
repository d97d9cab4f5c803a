//! Game configuration loaded from TOML.

use crate::render::Symbols;
use derive_getters::Getters;
use derive_more::{Display, Error};
use oxo_engine::Side;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Who opens the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstMover {
    /// Ask at the start of the game.
    #[default]
    Ask,
    /// The human opens.
    Human,
    /// The computer opens.
    Computer,
}

impl FirstMover {
    /// The opening side, or `None` when the player should be asked.
    pub fn side(self) -> Option<Side> {
        match self {
            FirstMover::Ask => None,
            FirstMover::Human => Some(Side::Human),
            FirstMover::Computer => Some(Side::Computer),
        }
    }
}

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who opens the game.
    #[serde(default)]
    first_mover: FirstMover,

    /// Mark drawn for the human's cells.
    #[serde(default = "default_human_symbol")]
    human_symbol: char,

    /// Mark drawn for the computer's cells.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: char,

    /// File receiving tracing output, kept off the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_human_symbol() -> char {
    'X'
}

fn default_computer_symbol() -> char {
    'O'
}

fn default_log_file() -> PathBuf {
    PathBuf::from("oxo.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_mover: FirstMover::default(),
            human_symbol: default_human_symbol(),
            computer_symbol: default_computer_symbol(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config = Self::from_file(path)?;
            info!(first_mover = %config.first_mover, "Config loaded");
            Ok(config)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the first mover, e.g. from a command-line flag.
    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }

    /// Board marks for rendering.
    pub fn symbols(&self) -> Symbols {
        Symbols::new(self.human_symbol, self.computer_symbol)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for symbol in [self.human_symbol, self.computer_symbol] {
            if symbol.is_whitespace() {
                return Err(ConfigError::new("Symbols must not be blank".to_string()));
            }
        }
        if self.human_symbol == self.computer_symbol {
            return Err(ConfigError::new(format!(
                "Human and computer share the symbol '{}'",
                self.human_symbol
            )));
        }
        Ok(())
    }
}

/// Configuration error.
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
    /// Creates a new configuration error.
    #[track_caller]
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
    fn test_empty_file_gives_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.human_symbol(), 'X');
        assert_eq!(config.first_mover().side(), None);
    }

    #[test]
    fn test_partial_file() {
        let config = GameConfig::from_toml("first_mover = \"computer\"\ncomputer_symbol = \"@\"").unwrap();
        assert_eq!(config.first_mover().side(), Some(Side::Computer));
        assert_eq!(*config.computer_symbol(), '@');
        assert_eq!(*config.human_symbol(), 'X');
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let err = GameConfig::from_toml("human_symbol = \"O\"").unwrap_err();
        assert!(err.message.contains("share the symbol"));
    }

    #[test]
    fn test_unknown_first_mover_rejected() {
        assert!(GameConfig::from_toml("first_mover = \"dealer\"").is_err());
    }
}
