//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["namecraft.toml", ".namecraft.toml"];

/// Prefix for environment overrides, e.g. `NAMECRAFT_SERVER__LISTEN_ADDR`
pub const ENV_PREFIX: &str = "NAMECRAFT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables prefixed with `NAMECRAFT_` (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./namecraft.toml` or `./.namecraft.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/namecraft/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/namecraft/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("namecraft").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used, in priority order
    pub fn config_sources() -> Vec<String> {
        let mut sources = Vec::new();

        match Self::project_config_path() {
            Some(path) => sources.push(format!("[FOUND] Project: {}", path.display())),
            None => sources.push("[     ] Project: ./namecraft.toml or ./.namecraft.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            sources.push(format!("[{}] Global:  {}", marker, path.display()));
        }

        sources.push(format!("[     ] Env:     {}*", ENV_PREFIX));
        sources.push("[     ] Default: built-in defaults".to_string());
        sources
    }

    /// Render a configuration as TOML with secrets masked
    pub fn render(config: &FileConfig) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&config.redacted())
    }
}
