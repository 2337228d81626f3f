//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Accepted values for `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Raw logging configuration from TOML
///
/// `RUST_LOG`, when set, overrides `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Default log level
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl FileLoggingConfig {
    pub fn is_known_level(&self) -> bool {
        LOG_LEVELS.contains(&self.level.to_lowercase().as_str())
    }

    /// The configured level, or `info` when it is not one of [`LOG_LEVELS`]
    pub fn effective_level(&self) -> &str {
        if self.is_known_level() {
            &self.level
        } else {
            "info"
        }
    }
}
