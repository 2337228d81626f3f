//! Generation request entity

use super::tone::Tone;
use serde::Serialize;

/// Extension used when the caller does not name one.
pub const DEFAULT_EXTENSION: &str = ".com";

/// A validated request for domain name suggestions (Value Object)
///
/// Only [`validate`](super::validation::validate) builds one, so holding a
/// `GenerationRequest` means the input already passed the schema checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    business_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<String>,
    tones: Vec<Tone>,
    extension: String,
}

impl GenerationRequest {
    pub(crate) fn new(
        business_type: String,
        keywords: Option<String>,
        tones: Vec<Tone>,
        extension: String,
    ) -> Self {
        Self {
            business_type,
            keywords,
            tones,
            extension,
        }
    }

    /// The business description, verbatim
    pub fn business_type(&self) -> &str {
        &self.business_type
    }

    /// Optional keyword hint
    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref()
    }

    /// Keywords, treating an empty string as absent
    pub fn effective_keywords(&self) -> Option<&str> {
        self.keywords().filter(|k| !k.is_empty())
    }

    /// Requested tones, never empty, first occurrence order
    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    /// Preferred domain extension
    pub fn extension(&self) -> &str {
        &self.extension
    }
}
