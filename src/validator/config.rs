//! Validator configuration

use crate::dictionary::DEFAULT_LANGUAGE;

/// Minimum letters a candidate needs by default
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Tunable parts of the validation rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Fewest letters a candidate may have
    pub min_length: usize,
    /// Whether the root word itself counts as a find
    pub allow_root_word: bool,
    /// Language passed to the dictionary
    pub language: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            allow_root_word: true,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ValidatorConfig {
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub const fn with_allow_root_word(mut self, allow: bool) -> Self {
        self.allow_root_word = allow;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
