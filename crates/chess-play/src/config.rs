//! Configuration file loading for the terminal front-end.
//!
//! Settings come from `chess-play.toml` in the current directory unless a
//! path is given on the command line. A missing default file is not an
//! error; every field has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Display and startup settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PlayConfig {
    /// Draw pieces with chess glyphs instead of layout letters.
    pub unicode: bool,
    /// Print file letters and rank numbers around the board.
    pub show_coordinates: bool,
    /// Mark the legal destinations of the selected piece.
    pub highlight_moves: bool,
    /// Default log filter, e.g. "warn" or "chess_engine=debug".
    pub log_level: String,
    /// Layout to start from instead of the standard one.
    pub start_fen: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            unicode: true,
            show_coordinates: true,
            highlight_moves: true,
            log_level: "warn".to_string(),
            start_fen: None,
        }
    }
}

impl PlayConfig {
    /// Loads the configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// path is tried and defaults are used if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads and parses the given file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the default configuration file path.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess-play.toml")
    }
}
