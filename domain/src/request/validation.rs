//! Request validation
//!
//! Turns an unstructured caller payload into a [`GenerationRequest`] or a
//! [`ValidationError`] listing every field-level problem found. Validation is
//! all-or-nothing and has no side effects.
//!
//! `tones` is checked against the closed [`Tone`] set while `extension` is
//! passed through unchecked. The asymmetry is intentional until the product
//! owners decide which extensions to allow.
//!
//! # Examples
//!
//! ```
//! use namecraft_domain::request::validate;
//!
//! let raw = serde_json::json!({
//!     "businessType": "handmade goods marketplace",
//!     "tones": ["professional"],
//! });
//! let request = validate(&raw).unwrap();
//! assert_eq!(request.extension(), ".com");
//! ```

use super::entities::{DEFAULT_EXTENSION, GenerationRequest};
use super::tone::Tone;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// A problem with a single input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn expected(field: impl Into<String>, expected: &str, received: &Value) -> Self {
        Self::new(
            field,
            format!("Expected {}, received {}", expected, json_type_name(received)),
        )
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Input rejected before any provider call was made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid request data: {}", join_issues(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Shorthand for an error with exactly one issue
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldIssue::new(field, message)])
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Whether any issue concerns `field`
    pub fn has_issue_for(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    /// All issues joined into one line, for the `details` field of responses
    pub fn details(&self) -> String {
        join_issues(&self.issues)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(FieldIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a raw request body.
pub fn validate(raw: &Value) -> Result<GenerationRequest, ValidationError> {
    let Some(body) = raw.as_object() else {
        return Err(ValidationError::new(vec![FieldIssue::expected(
            "body", "object", raw,
        )]));
    };

    let mut issues = Vec::new();
    let business_type = business_type(body, &mut issues);
    let keywords = keywords(body, &mut issues);
    let tones = tones(body, &mut issues);
    let extension = extension(body, &mut issues);

    match (business_type, tones, extension) {
        (Some(business_type), Some(tones), Some(extension)) if issues.is_empty() => Ok(
            GenerationRequest::new(business_type, keywords, tones, extension),
        ),
        _ => Err(ValidationError::new(issues)),
    }
}

fn business_type(body: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<String> {
    const FIELD: &str = "businessType";
    match body.get(FIELD) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        None | Some(Value::Null) | Some(Value::String(_)) => {
            issues.push(FieldIssue::new(FIELD, "Business type is required"));
            None
        }
        Some(other) => {
            issues.push(FieldIssue::expected(FIELD, "string", other));
            None
        }
    }
}

fn keywords(body: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match body.get("keywords") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(FieldIssue::expected("keywords", "string", other));
            None
        }
    }
}

fn tones(body: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<Vec<Tone>> {
    match (body.get("tones"), body.get("tone")) {
        (Some(Value::Array(items)), _) => tone_list(items, issues),
        (Some(other), _) if !other.is_null() => {
            issues.push(FieldIssue::expected("tones", "array", other));
            None
        }
        // Single-select clients send `tone` instead of `tones`.
        (_, Some(Value::String(s))) => match s.parse::<Tone>() {
            Ok(tone) => Some(vec![tone]),
            Err(_) => {
                issues.push(invalid_tone("tone", s));
                None
            }
        },
        (_, Some(other)) if !other.is_null() => {
            issues.push(FieldIssue::expected("tone", "string", other));
            None
        }
        _ => {
            issues.push(FieldIssue::new("tones", "At least one tone is required"));
            None
        }
    }
}

fn tone_list(items: &[Value], issues: &mut Vec<FieldIssue>) -> Option<Vec<Tone>> {
    if items.is_empty() {
        issues.push(FieldIssue::new("tones", "At least one tone is required"));
        return None;
    }

    let before = issues.len();
    let mut tones = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let field = format!("tones[{}]", index);
        match item {
            Value::String(s) => match s.parse::<Tone>() {
                Ok(tone) if !tones.contains(&tone) => tones.push(tone),
                Ok(_) => {}
                Err(_) => issues.push(invalid_tone(field, s)),
            },
            other => issues.push(FieldIssue::expected(field, "string", other)),
        }
    }

    (issues.len() == before).then_some(tones)
}

fn extension(body: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match body.get("extension") {
        None | Some(Value::Null) => Some(DEFAULT_EXTENSION.to_string()),
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(FieldIssue::expected("extension", "string", other));
            None
        }
    }
}

fn invalid_tone(field: impl Into<String>, value: &str) -> FieldIssue {
    FieldIssue::new(
        field,
        format!(
            "Invalid tone '{}', expected one of: {}",
            value,
            Tone::expected_values()
        ),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== Accepted input ====================

    #[test]
    fn accepts_minimal_request() {
        let request = validate(&json!({
            "businessType": "handmade goods marketplace",
            "tones": ["professional"],
            "extension": ".com"
        }))
        .unwrap();

        assert_eq!(request.business_type(), "handmade goods marketplace");
        assert_eq!(request.tones(), &[Tone::Professional]);
        assert_eq!(request.extension(), ".com");
        assert_eq!(request.keywords(), None);
    }

    #[test]
    fn defaults_extension_when_omitted() {
        let request = validate(&json!({
            "businessType": "bakery",
            "tones": ["funny"]
        }))
        .unwrap();
        assert_eq!(request.extension(), DEFAULT_EXTENSION);
    }

    #[test]
    fn defaults_extension_when_null() {
        let request = validate(&json!({
            "businessType": "bakery",
            "tones": ["funny"],
            "extension": null
        }))
        .unwrap();
        assert_eq!(request.extension(), ".com");
    }

    #[test]
    fn passes_any_extension_through() {
        for ext in [".ai", ".store", "xyz", ""] {
            let request = validate(&json!({
                "businessType": "bakery",
                "tones": ["bold"],
                "extension": ext
            }))
            .unwrap();
            assert_eq!(request.extension(), ext);
        }
    }

    #[test]
    fn keeps_keywords_verbatim() {
        let request = validate(&json!({
            "businessType": "bakery",
            "keywords": "sourdough, local",
            "tones": ["classy"]
        }))
        .unwrap();
        assert_eq!(request.keywords(), Some("sourdough, local"));
    }

    #[test]
    fn deduplicates_tones_in_first_seen_order() {
        let request = validate(&json!({
            "businessType": "bakery",
            "tones": ["quirky", "bold", "quirky"]
        }))
        .unwrap();
        assert_eq!(request.tones(), &[Tone::Quirky, Tone::Bold]);
    }

    #[test]
    fn accepts_legacy_single_tone() {
        let request = validate(&json!({
            "businessType": "bakery",
            "tone": "minimalist"
        }))
        .unwrap();
        assert_eq!(request.tones(), &[Tone::Minimalist]);
    }

    #[test]
    fn tones_take_precedence_over_legacy_tone() {
        let request = validate(&json!({
            "businessType": "bakery",
            "tones": ["modern"],
            "tone": "funny"
        }))
        .unwrap();
        assert_eq!(request.tones(), &[Tone::Modern]);
    }

    // ==================== Rejected input ====================

    #[test]
    fn rejects_missing_business_type() {
        let err = validate(&json!({ "tones": ["bold"] })).unwrap_err();
        assert!(err.has_issue_for("businessType"));
        assert_eq!(err.issues().len(), 1);
    }

    #[test]
    fn rejects_empty_business_type() {
        let err = validate(&json!({ "businessType": "", "tones": ["bold"] })).unwrap_err();
        assert_eq!(
            err.issues(),
            &[FieldIssue::new("businessType", "Business type is required")]
        );
    }

    #[test]
    fn rejects_non_string_business_type() {
        let err = validate(&json!({ "businessType": 42, "tones": ["bold"] })).unwrap_err();
        assert_eq!(err.issues()[0].message, "Expected string, received number");
    }

    #[test]
    fn rejects_empty_tones() {
        let err = validate(&json!({ "businessType": "bakery", "tones": [] })).unwrap_err();
        assert!(err.has_issue_for("tones"));
    }

    #[test]
    fn rejects_missing_tones() {
        let err = validate(&json!({ "businessType": "bakery" })).unwrap_err();
        assert!(err.has_issue_for("tones"));
    }

    #[test]
    fn rejects_unknown_tone() {
        let err = validate(&json!({
            "businessType": "bakery",
            "tones": ["bold", "sarcastic"]
        }))
        .unwrap_err();
        assert!(err.has_issue_for("tones[1]"));
        assert!(err.issues()[0].message.contains("sarcastic"));
    }

    #[test]
    fn rejects_tones_given_as_string() {
        let err = validate(&json!({ "businessType": "bakery", "tones": "bold" })).unwrap_err();
        assert_eq!(err.issues()[0].message, "Expected array, received string");
    }

    #[test]
    fn collects_every_issue() {
        let err = validate(&json!({
            "keywords": 7,
            "tones": [1],
            "extension": false
        }))
        .unwrap_err();
        let fields: Vec<_> = err.issues().iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["businessType", "keywords", "tones[0]", "extension"]);
    }

    #[test]
    fn rejects_non_object_body() {
        let err = validate(&json!(["bakery"])).unwrap_err();
        assert_eq!(
            err.issues(),
            &[FieldIssue::new("body", "Expected object, received array")]
        );
    }

    #[test]
    fn details_join_issues() {
        let err = ValidationError::new(vec![
            FieldIssue::new("a", "first"),
            FieldIssue::new("b", "second"),
        ]);
        assert_eq!(err.details(), "a: first; b: second");
        assert_eq!(err.to_string(), "Invalid request data: a: first; b: second");
    }
}
