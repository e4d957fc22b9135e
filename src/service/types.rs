//! JSON bodies returned by the spellchecking service.

use serde::{Deserialize, Serialize};

/// Response of `GET {base}/misspelled?word={w}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MisspellingResult {
    /// The word as echoed back by the service.
    pub word: String,
    pub misspelled: bool,
}

/// Response of `GET {base}/corrections?word={w}`.
///
/// Suggestions are ordered best-first; only the first one is ever applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResult {
    pub word: String,
    pub corrections: Vec<String>,
}

impl CorrectionResult {
    /// The top suggestion, or `None` when the service returned no suggestions.
    pub fn primary(&self) -> Option<&str> {
        self.corrections.first().map(String::as_str)
    }
}
