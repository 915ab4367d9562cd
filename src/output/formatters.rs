//! Formatting utilities for terminal output

use crate::core::letter_count;
use unicode_segmentation::UnicodeSegmentation;

/// Format a found word with its letter count, e.g. `(4) silk`
#[must_use]
pub fn word_badge(word: &str) -> String {
    format!("({}) {word}", letter_count(word))
}

/// Spell a word out with spaces between letters, e.g. `S I L K`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .graphemes(true)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
