//! Provider configuration from TOML (`[provider]` section)

use crate::providers::gemini::{ApiKey, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
use serde::{Deserialize, Serialize};

/// Gemini provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Model id passed to `generateContent`
    pub model: String,
    /// Base URL of the Generative Language API
    pub base_url: String,
    /// Direct API key (not recommended, use an env var instead).
    pub api_key: Option<String>,
    /// Environment variables checked for the API key, in order.
    pub api_key_env: Vec<String>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            api_key_env: vec!["GEMINI_API_KEY".to_string(), "API_KEY".to_string()],
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key from config, then from the process environment.
    pub fn resolve_api_key(&self) -> Option<ApiKey> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` for environment variables.
    ///
    /// Empty values are skipped, so an empty `GEMINI_API_KEY` falls through
    /// to `API_KEY`.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<ApiKey>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key
            .clone()
            .and_then(ApiKey::new)
            .or_else(|| {
                self.api_key_env
                    .iter()
                    .find_map(|name| lookup(name).and_then(ApiKey::new))
            })
    }

    /// Build the gateway settings with an already resolved key.
    pub fn to_gemini_config(&self, api_key: Option<ApiKey>) -> GeminiConfig {
        GeminiConfig {
            api_key,
            model: self.model.clone(),
            base_url: self.base_url.clone(),
        }
    }

    /// Copy safe to print: the inline key, if any, is masked.
    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.api_key.as_ref().map(|_| "<redacted>".to_string()),
            ..self.clone()
        }
    }
}
