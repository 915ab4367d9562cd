//! Command implementations

pub mod check;
pub mod play;
pub mod solutions;

pub use check::{CheckConfig, CheckResult, CheckStep, check_words};
pub use play::{run_play, run_play_with};
pub use solutions::{SolutionsResult, find_solutions};
