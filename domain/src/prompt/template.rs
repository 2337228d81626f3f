//! Prompt template for domain name generation

use crate::request::{GenerationRequest, join_tones};
use serde_json::{Value, json};

/// Number of names the prompt asks for. The provider may return more or fewer.
pub const TARGET_SUGGESTIONS: usize = 10;

/// Placeholder rendered when the caller gave no keywords
pub const NO_KEYWORDS: &str = "None provided";

/// Builds the provider prompt and the structured-output schema
pub struct SuggestionPromptTemplate;

impl SuggestionPromptTemplate {
    /// Render the full instruction block for `request`.
    ///
    /// Rendering is deterministic: the same request always yields the same
    /// prompt text.
    pub fn render(request: &GenerationRequest) -> String {
        format!(
            r#"{preamble}

Based on the following user input, suggest {count} creative, brandable, and scroll-stopping domain name ideas for their new business.

Details:
- Business Type: {business_type}
- Keywords (optional): {keywords}
- Tone/Style Preference: {tones} (e.g., funny, classy, quirky, modern, bold, professional)
- Preferred Domain Extension: {extension} (e.g., .com, .ai, .store)

{guidelines}

{output}"#,
            preamble = Self::preamble(),
            count = TARGET_SUGGESTIONS,
            business_type = request.business_type(),
            keywords = request.effective_keywords().unwrap_or(NO_KEYWORDS),
            tones = join_tones(request.tones()),
            extension = request.extension(),
            guidelines = Self::guidelines(),
            output = Self::output_directive(),
        )
    }

    fn preamble() -> &'static str {
        "You are a startup naming expert trained on frameworks used by successful entrepreneurs and millionaires."
    }

    fn guidelines() -> &'static str {
        r#"Guidelines:
- Use naming techniques inspired by Greg Isenberg's framework:
    - Descriptive names (clearly explain the business's value or appeal)
    - Culturally-relevant phrases (that resonate with trends or specific communities)
    - Humorous or playful ideas (that are memorable and viral-worthy)
- Avoid generic, forgettable, or "tofu" names (bland or hard to remember).
- Follow the "telephone test": names should be easy to say, spell, and search.
- Use clever wordplay or subtle alliteration where it enhances memorability.
- At least 2 names should come with a short explanation of why they work well.
- Optionally, suggest whether a domain or social handle may be available.

Your goal is to create names that could help this product go viral and build a strong internet-first brand."#
    }

    fn output_directive() -> String {
        format!(
            r#"Generate exactly {} high-quality names.

Return the response as a JSON array where each item has:
- name: the domain name (required)
- type: the category (e.g., "Descriptive", "Cultural Phrase", "Humorous", "Wordplay") (required)
- rationale: explanation of why this name works well (required)
- availability: "available", "check", or "taken" (your best guess, optional)
- telephoneTest: true/false if it passes the telephone test (optional)
- viralPotential: "Low", "Medium", "High", or "Very High" (optional)"#,
            TARGET_SUGGESTIONS
        )
    }

    /// JSON schema of the expected response: an array of suggestion objects.
    pub fn response_schema() -> Value {
        json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "type": { "type": "string" },
                    "rationale": { "type": "string" },
                    "availability": { "type": "string" },
                    "telephoneTest": { "type": "boolean" },
                    "viralPotential": { "type": "string" }
                },
                "required": ["name", "type", "rationale"]
            }
        })
    }
}
