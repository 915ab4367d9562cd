//! Core domain types for the word scramble game
//!
//! Pure, dependency-light types: normalization, the root word letter pool,
//! and the rule outcomes reported by validation.

mod rule;
mod word;

pub use rule::{Accepted, RuleKind, RuleViolation};
pub use word::{RootWord, WordError, can_spell, letter_count, normalize};
