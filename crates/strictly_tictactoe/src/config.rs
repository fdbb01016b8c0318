//! Game configuration loaded from TOML.

use super::SortOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Storage key the statistics record lives under by default.
pub const DEFAULT_STATS_KEY: &str = "ticTacToeStats";

/// Settings for a game session.
///
/// Every field is optional in the TOML file:
///
/// ```toml
/// stats_key = "ticTacToeStats"
/// stats_dir = "/var/lib/tictactoe"
/// order = "descending"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Key the statistics record is stored under.
    #[setters(into)]
    stats_key: String,

    /// Directory for the file-backed statistics store, if any.
    #[setters(strip_option, into)]
    stats_dir: Option<PathBuf>,

    /// Initial move-history display order.
    order: SortOrder,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stats_key: DEFAULT_STATS_KEY.to_string(),
            stats_dir: None,
            order: SortOrder::default(),
        }
    }
}

impl GameConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.stats_key.trim().is_empty() {
            return Err(ConfigError::new("stats_key must not be empty".to_string()));
        }

        debug!(stats_key = %config.stats_key, order = ?config.order, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(stats_key = %config.stats_key, "Config loaded successfully");
        Ok(config)
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
