//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_solutions_result, write_check_result, write_new_game, write_outcome,
    write_used_words, write_violation,
};
