//! Configuration for the console game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who places the first marker. The first mover always plays X.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstPlayer {
    /// The human opens the game.
    #[default]
    Human,
    /// The engine opens the game.
    Ai,
}

/// Settings for a console game, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DodoConfig {
    /// Who moves first.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Name shown for the engine.
    #[serde(default = "default_ai_name")]
    ai_name: String,

    /// Whether to print the greeting banner.
    #[serde(default = "default_show_banner")]
    show_banner: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_ai_name() -> String {
    "Dodo".to_string()
}

fn default_show_banner() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for DodoConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            ai_name: default_ai_name(),
            show_banner: default_show_banner(),
            log_filter: default_log_filter(),
        }
    }
}

impl DodoConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            first_player = %config.first_player,
            ai_name = %config.ai_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Returns the config with `first_player` replaced.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
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
