//! Validation rules and their violations
//!
//! Each rejected candidate is reported as a [`RuleViolation`] carrying the
//! broken rule plus a title/message pair suitable for showing to the player.

use super::word::letter_count;
use std::fmt;
use thiserror::Error;

/// The rule a candidate word failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Candidate was already accepted this game
    DuplicateWord,
    /// Candidate is the root word itself and the root word is not allowed
    RootWord,
    /// Candidate cannot be spelled from the root word's letters
    ImpossibleWord,
    /// Dictionary does not recognize the candidate
    UnrecognizedWord,
    /// Candidate has fewer letters than the minimum
    TooShort,
}

impl RuleKind {
    /// Short heading for the violation
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::DuplicateWord => "Word used already",
            Self::RootWord => "Word is the root",
            Self::ImpossibleWord => "Word not possible",
            Self::UnrecognizedWord => "Word not recognized",
            Self::TooShort => "Word too short",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DuplicateWord => "duplicate",
            Self::RootWord => "root-word",
            Self::ImpossibleWord => "impossible",
            Self::UnrecognizedWord => "unrecognized",
            Self::TooShort => "too-short",
        };
        f.write_str(name)
    }
}

/// A candidate rejected by the first rule it broke
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{title}: {message}")]
pub struct RuleViolation {
    /// The rule that was broken
    pub kind: RuleKind,
    /// Short heading, e.g. "Word used already"
    pub title: String,
    /// Explanation shown under the title
    pub message: String,
}

impl RuleViolation {
    /// The word was already accepted this game
    #[must_use]
    pub fn duplicate() -> Self {
        Self::new(RuleKind::DuplicateWord, "Be more original.")
    }

    /// The word is the root word itself
    #[must_use]
    pub fn root_word() -> Self {
        Self::new(
            RuleKind::RootWord,
            "Find something shorter than the word you were given.",
        )
    }

    /// The word uses letters `root` does not have
    #[must_use]
    pub fn impossible(root: &str) -> Self {
        Self::new(
            RuleKind::ImpossibleWord,
            format!("You can't spell that word from '{root}'!"),
        )
    }

    /// The dictionary does not know the word
    #[must_use]
    pub fn unrecognized() -> Self {
        Self::new(
            RuleKind::UnrecognizedWord,
            "You can't just make them up, you know!",
        )
    }

    /// The word has fewer than `min_length` letters
    #[must_use]
    pub fn too_short(min_length: usize) -> Self {
        Self::new(
            RuleKind::TooShort,
            format!("Words must be at least {min_length} letters long."),
        )
    }

    fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            message: message.into(),
        }
    }
}

/// A candidate that passed every rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The normalized word
    pub word: String,
    /// Letter count, which is also the score the word earns
    pub length: usize,
}

impl Accepted {
    /// Accept `word`, scoring one point per letter
    #[must_use]
    pub fn new(word: String) -> Self {
        let length = letter_count(&word);
        Self { word, length }
    }
}
