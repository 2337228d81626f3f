//! HTTP router

use super::handlers::{self, AppState};
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use namecraft_application::GenerateSuggestionsUseCase;
use std::time::Instant;

/// Path of the generation endpoint
pub const GENERATE_DOMAINS_PATH: &str = "/api/generate-domains";

/// Build the application router around a configured use case.
pub fn router(use_case: GenerateSuggestionsUseCase) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(GENERATE_DOMAINS_PATH, post(handlers::generate_domains))
        .with_state(AppState { use_case })
        .layer(middleware::from_fn(log_http_request))
}

async fn log_http_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();
    let response = next.run(req).await;
    tracing::info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "http request"
    );
    response
}
