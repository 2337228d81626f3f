//! Gemini wire types and conversions
//!
//! Request/response envelopes for the `generateContent` REST endpoint, plus
//! the conversion from a plain JSON schema to Gemini's schema dialect.

use namecraft_application::GatewayError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ==================== Request ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'static str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Value,
}

impl<'a> GenerateContentRequest<'a> {
    /// A single user turn carrying `prompt`, constrained to JSON output.
    pub fn structured(prompt: &'a str, schema: &Value) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: to_gemini_schema(schema),
            },
        }
    }
}

// ==================== Response ====================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` if it has no text.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }
}

// ==================== Errors ====================

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<u16>,
    message: Option<String>,
    status: Option<String>,
}

/// Convert a non-2xx response into a [`GatewayError::Rejected`].
///
/// Falls back to the raw body when it is not a Gemini error envelope.
pub fn convert_error_response(http_status: u16, body: &str) -> GatewayError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => GatewayError::Rejected {
            status: Some(envelope.error.code.unwrap_or(http_status)),
            code: envelope.error.status,
            message: envelope
                .error
                .message
                .unwrap_or_else(|| format!("HTTP {}", http_status)),
        },
        Err(_) => {
            let message = if body.trim().is_empty() {
                format!("HTTP {}", http_status)
            } else {
                body.trim().to_string()
            };
            GatewayError::rejected_with_status(http_status, message)
        }
    }
}

// ==================== Schema ====================

/// Convert a JSON schema into Gemini's OpenAPI-style dialect.
///
/// Gemini expects upper-case type names (`ARRAY`, `OBJECT`, `STRING`, ...).
/// Everything else, including `required`, is kept as is.
pub fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => {
            let converted: Map<String, Value> = map
                .iter()
                .map(|(key, value)| {
                    let value = match (key.as_str(), value) {
                        ("type", Value::String(t)) => Value::String(t.to_uppercase()),
                        _ => to_gemini_schema(value),
                    };
                    (key.clone(), value)
                })
                .collect();
            Value::Object(converted)
        }
        Value::Array(items) => Value::Array(items.iter().map(to_gemini_schema).collect()),
        other => other.clone(),
    }
}
