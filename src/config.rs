//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use derive_setters::Setters;
use noughts_core::{Difficulty, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::AiSettings;
use crate::cli::Cli;
use crate::diagnostics::DEFAULT_MAX_ENTRIES;

/// Settings for a game session.
///
/// Every field has a default, so a missing file or a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct AppConfig {
    /// Random or negamax opponent.
    pub difficulty: Difficulty,

    /// Whether the computer opponent starts enabled.
    pub ai_enabled: bool,

    /// The mark the computer plays.
    pub ai_player: Player,

    /// Diagnostics log file.
    #[setters(into)]
    pub log_file: PathBuf,

    /// Whether diagnostics are appended to `log_file`.
    pub file_logging: bool,

    /// Entries kept in the log console.
    pub max_log_entries: usize,

    /// Whether the board saved on exit is restored on start.
    pub restore_state: bool,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("application.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Optimal,
            ai_enabled: false,
            ai_player: Player::O,
            log_file: default_log_file(),
            file_logging: true,
            max_log_entries: DEFAULT_MAX_ENTRIES,
            restore_state: true,
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

        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self, cli))]
    pub fn merge_cli(self, cli: &Cli) -> Self {
        let mut config = self;
        if let Some(difficulty) = cli.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if cli.vs_ai {
            config = config.with_ai_enabled(true);
        }
        if let Some(player) = cli.ai_player {
            config = config.with_ai_player(player);
        }
        if let Some(path) = &cli.log_file {
            config = config.with_log_file(path.clone());
        }
        if cli.no_file_log {
            config = config.with_file_logging(false);
        }
        if cli.state.is_some() {
            config = config.with_restore_state(false);
        }
        debug!(?config, "Applied command-line overrides");
        config
    }

    /// Opponent settings described by this configuration.
    pub fn ai_settings(&self) -> AiSettings {
        AiSettings {
            enabled: self.ai_enabled,
            player: self.ai_player,
            difficulty: self.difficulty,
        }
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
