//! Gemini LLM gateway
//!
//! One `generateContent` call per request. No retries, no timeout of its
//! own: callers that need a deadline wrap the future.

use super::GeminiConfig;
use super::types::{self, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use namecraft_application::{GatewayError, LlmGateway};
use serde_json::Value;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("namecraft/", env!("CARGO_PKG_VERSION"));

/// Gateway to Google's Generative Language API
pub struct GeminiLlmGateway {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiLlmGateway {
    /// Build the gateway and its shared HTTP client.
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                GatewayError::ConnectionError(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<Option<String>, GatewayError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(GatewayError::MissingCredentials)?;

        let body = GenerateContentRequest::structured(prompt, schema);
        debug!(model = %self.config.model, "Calling Gemini generateContent");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(types::convert_error_response(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        if let Some(reason) = parsed.block_reason() {
            warn!(reason, "Gemini blocked the prompt");
        }
        debug!(
            finish_reason = parsed.finish_reason().unwrap_or("-"),
            "Gemini call completed"
        );

        Ok(parsed.text())
    }
}
