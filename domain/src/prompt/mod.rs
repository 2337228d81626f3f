//! Prompt domain
//!
//! The instruction block and output schema sent to the provider.

mod template;

pub use template::{NO_KEYWORDS, SuggestionPromptTemplate, TARGET_SUGGESTIONS};
