use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read score config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse score config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub const DEFAULT_FIRST_LETTER_MATCH: i32 = 15;
pub const DEFAULT_CONSECUTIVE_MATCH: i32 = 15;
pub const DEFAULT_CAMEL_CASE_MATCH: i32 = 30;
pub const DEFAULT_SEPARATOR_MATCH: i32 = 30;
pub const DEFAULT_UNMATCHED_LETTER: i32 = -1;
pub const DEFAULT_UNMATCHED_LEADING_LETTER: i32 = -5;

/// Weights for every bonus and penalty applied when scoring an alignment.
///
/// Penalties are expressed as negative weights. A config is handed to an
/// engine once at construction and only read afterwards, so independently
/// configured engines can coexist.
///
/// Any subset of fields may be given in JSON; missing fields take the defaults:
///
/// ```
/// use fuzzy_rank::ScoreConfig;
///
/// let config = ScoreConfig::from_json(r#"{"camel_case_match": 50}"#).unwrap();
/// assert_eq!(config.camel_case_match, 50);
/// assert_eq!(config.first_letter_match, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Bonus for a pair whose first match is at position 0
    pub first_letter_match: i32,
    /// Bonus for two adjacent matched positions
    pub consecutive_match: i32,
    /// Bonus for a lowercase match followed by an uppercase match
    pub camel_case_match: i32,
    /// Bonus when the earlier match of a pair is a space or underscore
    pub separator_match: i32,
    /// Per-character penalty scaled by the last matched position
    pub unmatched_letter: i32,
    /// Per-character penalty for unmatched leading characters (at most 3 count)
    pub unmatched_leading_letter: i32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            first_letter_match: DEFAULT_FIRST_LETTER_MATCH,
            consecutive_match: DEFAULT_CONSECUTIVE_MATCH,
            camel_case_match: DEFAULT_CAMEL_CASE_MATCH,
            separator_match: DEFAULT_SEPARATOR_MATCH,
            unmatched_letter: DEFAULT_UNMATCHED_LETTER,
            unmatched_leading_letter: DEFAULT_UNMATCHED_LEADING_LETTER,
        }
    }
}

impl ScoreConfig {
    /// Parse a config from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the JSON is malformed or a field has
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read, or
    /// `ConfigError::Parse` if its content is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    #[must_use]
    pub fn with_first_letter_match(mut self, weight: i32) -> Self {
        self.first_letter_match = weight;
        self
    }

    #[must_use]
    pub fn with_consecutive_match(mut self, weight: i32) -> Self {
        self.consecutive_match = weight;
        self
    }

    #[must_use]
    pub fn with_camel_case_match(mut self, weight: i32) -> Self {
        self.camel_case_match = weight;
        self
    }

    #[must_use]
    pub fn with_separator_match(mut self, weight: i32) -> Self {
        self.separator_match = weight;
        self
    }

    #[must_use]
    pub fn with_unmatched_letter(mut self, weight: i32) -> Self {
        self.unmatched_letter = weight;
        self
    }

    #[must_use]
    pub fn with_unmatched_leading_letter(mut self, weight: i32) -> Self {
        self.unmatched_leading_letter = weight;
        self
    }
}
