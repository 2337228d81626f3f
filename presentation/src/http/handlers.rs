//! Request handlers

use super::error::ApiError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use namecraft_application::GenerateSuggestionsUseCase;
use namecraft_domain::Suggestion;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub use_case: GenerateSuggestionsUseCase,
}

/// Successful response of `POST /api/generate-domains`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateDomainsResponse {
    pub suggestions: Vec<Suggestion>,
}

pub async fn health() -> &'static str {
    "ok"
}

/// `POST /api/generate-domains`
pub async fn generate_domains(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateDomainsResponse>, ApiError> {
    let Json(raw) = payload.inspect_err(|e| warn!("Unreadable request body: {}", e))?;

    let suggestions = state.use_case.suggest(&raw).await.map_err(|e| {
        let err = ApiError::from(e);
        warn!(status = %err.status(), "Domain generation error: {}", err.body().error);
        err
    })?;

    info!(count = suggestions.len(), "Returning domain suggestions");
    Ok(Json(GenerateDomainsResponse { suggestions }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::error::{ErrorBody, GENERATION_FAILED, INVALID_REQUEST, QUOTA_EXCEEDED};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use namecraft_application::{GatewayError, LlmGateway};
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubGateway {
        reply: Result<Option<String>, GatewayError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LlmGateway for StubGateway {
        async fn generate_structured(
            &self,
            _prompt: &str,
            _schema: &Value,
        ) -> Result<Option<String>, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn state(reply: Result<Option<String>, GatewayError>) -> (AppState, Arc<StubGateway>) {
        let gateway = Arc::new(StubGateway {
            reply,
            calls: AtomicUsize::new(0),
        });
        let state = AppState {
            use_case: GenerateSuggestionsUseCase::new(gateway.clone()),
        };
        (state, gateway)
    }

    async fn call(state: AppState, body: Value) -> Response {
        generate_domains(State(state), Ok(Json(body)))
            .await
            .into_response()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "businessType": "handmade goods marketplace",
            "tones": ["professional"],
            "extension": ".com"
        })
    }

    #[tokio::test]
    async fn test_success_returns_suggestions() {
        let payload = json!([
            { "name": "CraftVault.com", "type": "Descriptive", "rationale": "Vault." }
        ]);
        let (state, _) = state(Ok(Some(payload.to_string())));

        let response = call(state, valid_body()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = body_json(response).await;
        assert_eq!(body, json!({ "suggestions": payload }));
    }

    #[tokio::test]
    async fn test_validation_failure_is_400_without_provider_call() {
        let (state, gateway) = state(Ok(Some("[]".to_string())));

        let response = call(state, json!({ "businessType": "bakery", "tones": [] })).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = body_json(response).await;
        assert_eq!(body.error, INVALID_REQUEST);
        assert!(body.details.unwrap().contains("tones"));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_configuration_failure_is_401() {
        let (state, _) = state(Err(GatewayError::MissingCredentials));
        let response = call(state, valid_body()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_quota_failure_is_429() {
        let (state, _) = state(Err(GatewayError::rejected_with_status(
            429,
            "Resource has been exhausted",
        )));
        let response = call(state, valid_body()).await;
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body: ErrorBody = body_json(response).await;
        assert_eq!(body.error, QUOTA_EXCEEDED);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_500() {
        let (state, _) = state(Ok(Some("definitely not json".to_string())));
        let response = call(state, valid_body()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = body_json(response).await;
        assert_eq!(body.error, GENERATION_FAILED);
        assert!(body.details.is_some());
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(health().await, "ok");
    }
}
