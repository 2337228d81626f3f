//! LLM Gateway port
//!
//! Defines the narrow capability the generator needs from a generative-model
//! provider: send one prompt together with a response schema and get back the
//! provider's text payload.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No API key was supplied when the gateway was built.
    #[error("API key is not configured")]
    MissingCredentials,

    /// The provider answered with an error.
    ///
    /// `status` is the HTTP status when known, `code` the provider's own
    /// status string (e.g. `RESOURCE_EXHAUSTED`).
    #[error("Provider rejected request{}: {message}", status_suffix(.status, .code))]
    Rejected {
        status: Option<u16>,
        code: Option<String>,
        message: String,
    },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The provider answered 2xx but the envelope could not be read.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Shorthand for a rejection that only carries a message
    pub fn rejected(message: impl Into<String>) -> Self {
        GatewayError::Rejected {
            status: None,
            code: None,
            message: message.into(),
        }
    }

    /// Shorthand for a rejection with an HTTP status
    pub fn rejected_with_status(status: u16, message: impl Into<String>) -> Self {
        GatewayError::Rejected {
            status: Some(status),
            code: None,
            message: message.into(),
        }
    }
}

fn status_suffix(status: &Option<u16>, code: &Option<String>) -> String {
    match (status, code) {
        (Some(status), Some(code)) => format!(" ({} {})", status, code),
        (Some(status), None) => format!(" ({})", status),
        (None, Some(code)) => format!(" ({})", code),
        (None, None) => String::new(),
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with LLM providers.
/// Implementations (adapters) live in the infrastructure layer. Credentials
/// are handed to the adapter when it is built, never read per call.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send `prompt` and ask the provider to answer with JSON matching `schema`.
    ///
    /// Returns `Ok(None)` when the provider answered without any text payload.
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<Option<String>, GatewayError>;
}
