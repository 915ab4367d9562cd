//! Candidate word validation
//!
//! Applies the game's rules to player input. The dictionary is supplied by
//! the caller through the [`Dictionary`](crate::dictionary::Dictionary) trait.

mod config;
mod engine;

pub use config::{DEFAULT_MIN_LENGTH, ValidatorConfig};
pub use engine::WordValidator;
