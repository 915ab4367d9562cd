//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Each line is normalized; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to an owned word list
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}
