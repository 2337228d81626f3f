//! Generate Suggestions use case.
//!
//! The suggestion generator: renders the prompt for a validated
//! [`GenerationRequest`], makes exactly one provider call through the
//! [`LlmGateway`] port, and parses the JSON payload into [`Suggestion`]s.
//!
//! There are no retries and no caching. A provider failure is classified
//! (see [`GenerationError::from`]) and returned as-is. Results are all or
//! nothing: either every parsed suggestion is returned or an error is.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use namecraft_domain::util::preview;
use namecraft_domain::{
    GenerationRequest, Suggestion, SuggestionPromptTemplate, TARGET_SUGGESTIONS, ValidationError,
    join_tones, validate,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Markers in provider messages that indicate quota or rate limiting
const QUOTA_MARKERS: [&str; 3] = ["quota", "429", "RESOURCE_EXHAUSTED"];

/// Provider status codes that indicate bad or missing credentials
const CREDENTIAL_CODES: [&str; 2] = ["UNAUTHENTICATED", "PERMISSION_DENIED"];

/// Coarse classification of a [`GenerationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    EmptyResponse,
    MalformedResponse,
    Configuration,
    QuotaExceeded,
    Upstream,
}

/// Errors that can occur while generating suggestions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Empty response from provider")]
    EmptyResponse,

    /// The payload was not a JSON array of suggestions. `raw` keeps the
    /// payload for diagnostics.
    #[error("Failed to parse provider response: {reason}")]
    MalformedResponse { reason: String, raw: String },

    #[error("Provider configuration error: {0}")]
    Configuration(String),

    #[error("Provider quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Provider request failed: {0}")]
    Upstream(String),
}

impl GenerationError {
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            GenerationError::EmptyResponse => GenerationErrorKind::EmptyResponse,
            GenerationError::MalformedResponse { .. } => GenerationErrorKind::MalformedResponse,
            GenerationError::Configuration(_) => GenerationErrorKind::Configuration,
            GenerationError::QuotaExceeded(_) => GenerationErrorKind::QuotaExceeded,
            GenerationError::Upstream(_) => GenerationErrorKind::Upstream,
        }
    }
}

impl From<GatewayError> for GenerationError {
    /// Classify a provider failure.
    ///
    /// Quota signals are checked before credential signals, so a 429 whose
    /// message happens to mention the API key still counts as quota.
    fn from(err: GatewayError) -> Self {
        let message = err.to_string();
        if is_quota_error(&err, &message) {
            GenerationError::QuotaExceeded(message)
        } else if is_credential_error(&err, &message) {
            GenerationError::Configuration(message)
        } else {
            GenerationError::Upstream(message)
        }
    }
}

fn is_quota_error(err: &GatewayError, message: &str) -> bool {
    if let GatewayError::Rejected { status, code, .. } = err {
        if *status == Some(429) || code.as_deref() == Some("RESOURCE_EXHAUSTED") {
            return true;
        }
    }
    let lowered = message.to_lowercase();
    QUOTA_MARKERS
        .iter()
        .any(|marker| lowered.contains(&marker.to_lowercase()))
}

fn is_credential_error(err: &GatewayError, message: &str) -> bool {
    match err {
        GatewayError::MissingCredentials => true,
        GatewayError::Rejected { status, code, .. } => {
            matches!(status, Some(401 | 403))
                || code
                    .as_deref()
                    .is_some_and(|code| CREDENTIAL_CODES.contains(&code))
                || message.contains("API key")
        }
        _ => message.contains("API key"),
    }
}

/// Errors from the full validate-then-generate pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuggestDomainsError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Parse a provider payload into suggestions.
///
/// Only JSON shape is checked. Optional fields stay optional and the number
/// of items is not adjusted.
pub fn parse_suggestions(raw: &str) -> Result<Vec<Suggestion>, GenerationError> {
    serde_json::from_str(raw).map_err(|e| GenerationError::MalformedResponse {
        reason: e.to_string(),
        raw: raw.to_string(),
    })
}

/// Use case for generating domain name suggestions.
///
/// The gateway is injected at construction so tests can substitute a stub
/// and several differently configured instances can coexist.
pub struct GenerateSuggestionsUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl Clone for GenerateSuggestionsUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl GenerateSuggestionsUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// Validate a raw payload, then generate.
    ///
    /// The gateway is never called when validation fails.
    pub async fn suggest(&self, raw: &Value) -> Result<Vec<Suggestion>, SuggestDomainsError> {
        let request = validate(raw).inspect_err(|e| debug!("Rejected request: {}", e))?;
        Ok(self.execute(&request).await?)
    }

    /// Generate suggestions for an already validated request.
    pub async fn execute(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Suggestion>, GenerationError> {
        info!(
            business_type = %preview(request.business_type(), 80),
            tones = %join_tones(request.tones()),
            extension = %request.extension(),
            "Generating domain suggestions"
        );

        let prompt = SuggestionPromptTemplate::render(request);
        let schema = SuggestionPromptTemplate::response_schema();
        debug!(prompt_bytes = prompt.len(), "Prompt rendered");

        let payload = match self.gateway.generate_structured(&prompt, &schema).await {
            Ok(payload) => payload,
            Err(e) => {
                let err = GenerationError::from(e);
                warn!(kind = ?err.kind(), "Provider call failed: {}", err);
                return Err(err);
            }
        };

        let raw = match payload {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                warn!("Provider returned an empty payload");
                return Err(GenerationError::EmptyResponse);
            }
        };

        let suggestions = parse_suggestions(&raw).inspect_err(|e| {
            warn!(raw = %preview(&raw, 200), "Malformed provider payload: {}", e);
        })?;

        if suggestions.len() != TARGET_SUGGESTIONS {
            debug!(
                "Provider returned {} suggestions (asked for {})",
                suggestions.len(),
                TARGET_SUGGESTIONS
            );
        }
        info!(count = suggestions.len(), "Generated domain suggestions");

        Ok(suggestions)
    }
}
