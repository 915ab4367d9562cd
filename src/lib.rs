//! Word Scramble
//!
//! A word game: find as many words as possible hidden in the letters of a random root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{RootWord, RuleKind};
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::session::GameSession;
//! use word_scramble::validator::WordValidator;
//!
//! let dictionary = WordListDictionary::new("en", ["silk", "worm", "owl"]);
//! let mut game = GameSession::with_root(
//!     WordValidator::new(dictionary),
//!     RootWord::new("silkworm").unwrap(),
//! );
//!
//! game.submit("silk").unwrap();
//! assert_eq!(game.score(), 4);
//!
//! let rejected = game.submit("silk").unwrap_err();
//! assert_eq!(rejected.kind, RuleKind::DuplicateWord);
//! ```

// Core domain types
pub mod core;

// Dictionary lookups
pub mod dictionary;

// Word validation rules
pub mod validator;

// Game session state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
