//! Infrastructure layer for namecraft
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileProviderConfig, FileServerConfig,
};
pub use providers::gemini::{ApiKey, GeminiConfig, GeminiLlmGateway};
