//! Word lists for the word scramble game
//!
//! Provides embedded root words and dictionary compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
