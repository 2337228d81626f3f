//! Generation request domain
//!
//! The validated [`GenerationRequest`], its [`Tone`] vocabulary, and the
//! validator that turns raw caller input into one.

pub mod entities;
pub mod tone;
pub mod validation;

pub use entities::{DEFAULT_EXTENSION, GenerationRequest};
pub use tone::{Tone, join_tones};
pub use validation::{FieldIssue, ValidationError, validate};
