//! Presentation layer for namecraft
//!
//! This crate contains the HTTP boundary (axum router, handlers, error
//! mapping) and the CLI definitions.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, ErrorBody, GenerateDomainsResponse, router};
