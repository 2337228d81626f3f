//! Configuration file loading for namecraft
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NAMECRAFT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./namecraft.toml` or `./.namecraft.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/namecraft/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileProviderConfig, FileServerConfig, LOG_LEVELS,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
