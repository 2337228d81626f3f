//! Gemini provider adapter
//!
//! Implements the [`LlmGateway`](namecraft_application::LlmGateway) port on
//! top of Google's Generative Language REST API (`generateContent`) with
//! structured JSON output.

mod gateway;
pub mod types;

pub use gateway::GeminiLlmGateway;

use std::fmt;

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Default Generative Language API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Provider credential. `Debug` and `Display` never print the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting empty or whitespace-only values
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// The raw key, for request headers only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Settings for [`GeminiLlmGateway`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` makes every call fail with `MissingCredentials`
    pub api_key: Option<ApiKey>,
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_blank() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   ").is_none());
        assert_eq!(ApiKey::new("abc").unwrap().expose(), "abc");
    }

    #[test]
    fn test_api_key_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        assert!(!format!("{:?}", key).contains("super-secret"));
        assert!(!key.to_string().contains("super-secret"));

        let config = GeminiConfig::default().with_api_key(key);
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
