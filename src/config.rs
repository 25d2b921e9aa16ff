//! Session configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tictactoe_core::SeriesMode;
use tracing::{debug, info, instrument};

/// Series length as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum ModeChoice {
    /// One replayable match.
    #[default]
    #[serde(rename = "single")]
    #[value(name = "single")]
    Single,
    /// Three matches.
    #[serde(rename = "best-of-3")]
    #[value(name = "best-of-3")]
    BestOf3,
    /// Five matches.
    #[serde(rename = "best-of-5")]
    #[value(name = "best-of-5")]
    BestOf5,
}

impl From<ModeChoice> for SeriesMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Single => SeriesMode::Single,
            ModeChoice::BestOf3 => SeriesMode::BestOf(3),
            ModeChoice::BestOf5 => SeriesMode::BestOf(5),
        }
    }
}

/// Defaults for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name pre-filled for player X on the setup screen.
    #[serde(default)]
    player_x: String,

    /// Name pre-filled for player O on the setup screen.
    #[serde(default)]
    player_o: String,

    /// Mode selected when the setup screen opens.
    #[serde(default)]
    default_mode: ModeChoice,

    /// Where the TUI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_tournament.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_x: String::new(),
            player_o: String::new(),
            default_mode: ModeChoice::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.default_mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_x: Option<String>,
        player_o: Option<String>,
        mode: Option<ModeChoice>,
    ) -> Self {
        if let Some(name) = player_x {
            self.player_x = name;
        }
        if let Some(name) = player_o {
            self.player_o = name;
        }
        if let Some(mode) = mode {
            self.default_mode = mode;
        }
        self
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "player_x = \"Ada\"\ndefault_mode = \"best-of-5\"").expect("write");

        let config = AppConfig::from_file(file.path()).expect("parse");
        assert_eq!(config.player_x(), "Ada");
        assert_eq!(config.player_o(), "");
        assert_eq!(SeriesMode::from(*config.default_mode()), SeriesMode::BestOf(5));
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe_tournament.log"));
    }

    #[test]
    fn test_bad_file_reports_location() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "default_mode = \"best-of-7\"").expect("write");

        let err = AppConfig::from_file(file.path()).expect_err("invalid mode");
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = AppConfig::default().with_overrides(
            Some("Alan".into()),
            None,
            Some(ModeChoice::BestOf3),
        );
        assert_eq!(config.player_x(), "Alan");
        assert_eq!(config.player_o(), "");
        assert_eq!(config.default_mode(), &ModeChoice::BestOf3);
    }
}
