//! Tone value object
//!
//! A [`Tone`] is a qualitative style descriptor that steers the naming
//! heuristics applied in the prompt. The set is closed: anything outside
//! [`Tone::ALL`] is rejected at validation time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Naming tone requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Modern,
    Bold,
    Classy,
    Quirky,
    Funny,
    Trendy,
    Minimalist,
}

impl Tone {
    /// Every tone, in the order the UI presents them.
    pub const ALL: [Tone; 8] = [
        Tone::Professional,
        Tone::Modern,
        Tone::Bold,
        Tone::Classy,
        Tone::Quirky,
        Tone::Funny,
        Tone::Trendy,
        Tone::Minimalist,
    ];

    /// Wire identifier for this tone
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Modern => "modern",
            Tone::Bold => "bold",
            Tone::Classy => "classy",
            Tone::Quirky => "quirky",
            Tone::Funny => "funny",
            Tone::Trendy => "trendy",
            Tone::Minimalist => "minimalist",
        }
    }

    /// Comma separated list of accepted identifiers, for error messages.
    pub fn expected_values() -> String {
        Self::ALL
            .iter()
            .map(Tone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tone| tone.as_str() == lowered)
            .ok_or_else(|| format!("Invalid tone: {}", s))
    }
}

/// Join tones into a human-readable phrase: `bold`, `bold and quirky`,
/// `bold, quirky and funny`.
pub fn join_tones(tones: &[Tone]) -> String {
    match tones {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(Tone::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} and {}", head, last)
        }
    }
}
