//! Domain layer for namecraft
//!
//! This crate contains the core entities, value objects and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **GenerationRequest**: validated caller input (business type, keywords,
//!   tones, extension). Only [`request::validate`] constructs one.
//! - **Suggestion**: one candidate domain name returned by the provider.
//! - **SuggestionPromptTemplate**: renders the provider prompt and the
//!   structured-output schema for a request.

pub mod config;
pub mod prompt;
pub mod request;
pub mod suggestion;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use prompt::{NO_KEYWORDS, SuggestionPromptTemplate, TARGET_SUGGESTIONS};
pub use request::{
    DEFAULT_EXTENSION, FieldIssue, GenerationRequest, Tone, ValidationError, join_tones, validate,
};
pub use suggestion::Suggestion;
