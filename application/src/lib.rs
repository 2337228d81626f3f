//! Application layer for namecraft
//!
//! This crate contains the use case and the port it depends on.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::llm_gateway::{GatewayError, LlmGateway};
pub use use_cases::generate_suggestions::{
    GenerateSuggestionsUseCase, GenerationError, GenerationErrorKind, SuggestDomainsError,
    parse_suggestions,
};
