//! Error responses
//!
//! The only place where error kinds become HTTP status codes. Every failure
//! body has the shape `{ "error": string, "details"?: string }`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use namecraft_application::{GenerationError, SuggestDomainsError};
use namecraft_domain::ValidationError;
use serde::{Deserialize, Serialize};

pub const INVALID_REQUEST: &str = "Invalid request data";
pub const CONFIGURATION_ERROR: &str = "API configuration error. Please check your API key.";
pub const QUOTA_EXCEEDED: &str =
    "API quota exceeded. Please try again later or check your API billing settings.";
pub const QUOTA_DETAILS: &str =
    "The free tier has daily limits. Consider upgrading your API plan for higher quotas.";
pub const GENERATION_FAILED: &str = "Failed to generate domain names. Please try again.";

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// An error ready to be sent to the client
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, details: Option<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.into(),
                details,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, INVALID_REQUEST, Some(err.details()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            INVALID_REQUEST,
            Some(rejection.body_text()),
        )
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Configuration(_) => {
                ApiError::new(StatusCode::UNAUTHORIZED, CONFIGURATION_ERROR, None)
            }
            GenerationError::QuotaExceeded(_) => ApiError::new(
                StatusCode::TOO_MANY_REQUESTS,
                QUOTA_EXCEEDED,
                Some(QUOTA_DETAILS.to_string()),
            ),
            GenerationError::EmptyResponse
            | GenerationError::MalformedResponse { .. }
            | GenerationError::Upstream(_) => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERATION_FAILED,
                Some(err.to_string()),
            ),
        }
    }
}

impl From<SuggestDomainsError> for ApiError {
    fn from(err: SuggestDomainsError) -> Self {
        match err {
            SuggestDomainsError::Invalid(e) => e.into(),
            SuggestDomainsError::Generation(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::from(ValidationError::single("tones", "At least one tone is required"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().error, INVALID_REQUEST);
        assert_eq!(
            err.body().details.as_deref(),
            Some("tones: At least one tone is required")
        );
    }

    #[test]
    fn test_generation_kinds_map_to_statuses() {
        let cases = [
            (GenerationError::Configuration("no key".into()), StatusCode::UNAUTHORIZED),
            (GenerationError::QuotaExceeded("429".into()), StatusCode::TOO_MANY_REQUESTS),
            (GenerationError::Upstream("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (GenerationError::EmptyResponse, StatusCode::INTERNAL_SERVER_ERROR),
            (
                GenerationError::MalformedResponse {
                    reason: "expected value".into(),
                    raw: "oops".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_configuration_error_has_no_details() {
        let err = ApiError::from(GenerationError::Configuration("API key is not configured".into()));
        assert_eq!(err.body().error, CONFIGURATION_ERROR);
        assert_eq!(err.body().details, None);
    }

    #[test]
    fn test_quota_error_is_distinct_from_generic_failure() {
        let quota = ApiError::from(GenerationError::QuotaExceeded("limit".into()));
        let generic = ApiError::from(GenerationError::Upstream("limit".into()));
        assert_ne!(quota.body().error, generic.body().error);
        assert_eq!(quota.body().details.as_deref(), Some(QUOTA_DETAILS));
    }

    #[test]
    fn test_upstream_details_carry_message() {
        let err = ApiError::from(GenerationError::Upstream("connection reset".into()));
        assert_eq!(
            err.body().details.as_deref(),
            Some("Provider request failed: connection reset")
        );
    }

    #[test]
    fn test_body_omits_missing_details() {
        let json = serde_json::to_value(ErrorBody {
            error: "x".to_string(),
            details: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "error": "x" }));
    }
}
