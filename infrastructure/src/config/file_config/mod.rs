//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod provider;
mod server;

pub use logging::{FileLoggingConfig, LOG_LEVELS};
pub use provider::FileProviderConfig;
pub use server::FileServerConfig;

use namecraft_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Generative-model provider settings
    pub provider: FileProviderConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// The API key is not checked here; the binary decides whether a
    /// missing key is fatal.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Err(e) = self.server.socket_addr() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "server.listen_addr".to_string(),
                    value: self.server.listen_addr.clone(),
                },
                format!(
                    "server.listen_addr: '{}' is not a socket address ({})",
                    self.server.listen_addr, e
                ),
            ));
        }

        for (field, value) in [
            ("provider.model", &self.provider.model),
            ("provider.base_url", &self.provider.base_url),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{} must not be empty", field),
                ));
            }
        }

        if !self.logging.is_known_level() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidEnumValue {
                    field: "logging.level".to_string(),
                    value: self.logging.level.clone(),
                    valid_values: LOG_LEVELS.iter().map(|l| l.to_string()).collect(),
                },
                format!(
                    "logging.level: unknown value '{}', falling back to 'info'",
                    self.logging.level
                ),
            ));
        }

        issues
    }

    /// Copy safe to print
    pub fn redacted(&self) -> Self {
        Self {
            provider: self.provider.redacted(),
            ..self.clone()
        }
    }
}
