//! Suggestion entity

use serde::{Deserialize, Serialize};

/// One candidate domain name returned by the provider (Value Object)
///
/// Wire names follow the client contract (`type`, `telephoneTest`,
/// `viralPotential`). Optional fields are model guesses and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// The suggested domain or brand name
    pub name: String,
    /// Free-form category label, e.g. "Descriptive" or "Wordplay"
    #[serde(rename = "type")]
    pub category: String,
    /// Why the name works
    pub rationale: String,
    /// "available", "check" or "taken"; never an authoritative registry lookup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    /// Whether the name is easy to say, spell and search
    #[serde(
        rename = "telephoneTest",
        alias = "passesPhoneticTest",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub passes_phonetic_test: Option<bool>,
    /// "Low" through "Very High"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viral_potential: Option<String>,
}

impl Suggestion {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            rationale: rationale.into(),
            availability: None,
            passes_phonetic_test: None,
            viral_potential: None,
        }
    }

    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    pub fn with_phonetic_test(mut self, passes: bool) -> Self {
        self.passes_phonetic_test = Some(passes);
        self
    }

    pub fn with_viral_potential(mut self, potential: impl Into<String>) -> Self {
        self.viral_potential = Some(potential.into());
        self
    }
}
