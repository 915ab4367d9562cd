//! Solutions command
//!
//! Lists every known word that can be found inside a root word.

use crate::core::{RootWord, letter_count};
use crate::dictionary::Dictionary;
use crate::validator::WordValidator;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Every acceptable find for a root word
pub struct SolutionsResult {
    /// Normalized root word
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Score for finding every word
    pub max_score: usize,
    /// Number of candidate words scanned
    pub scanned: usize,
    /// Time spent scanning
    pub duration: Duration,
}

/// Find all candidates the validator would accept on a fresh game
///
/// Candidates are checked in parallel.
pub fn find_solutions<D, S>(
    validator: &WordValidator<D>,
    root: &RootWord,
    candidates: &[S],
) -> SolutionsResult
where
    D: Dictionary,
    S: AsRef<str> + Sync,
{
    let start = Instant::now();
    let no_words: [&str; 0] = [];

    let mut words: Vec<String> = candidates
        .par_iter()
        .filter_map(|candidate| {
            validator
                .validate(candidate.as_ref(), root, &no_words)
                .ok()
                .flatten()
        })
        .map(|accepted| accepted.word)
        .collect();

    words.sort_unstable_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });
    words.dedup();

    let max_score = words.iter().map(|w| letter_count(w)).sum();

    SolutionsResult {
        root: root.text().to_string(),
        words,
        max_score,
        scanned: candidates.len(),
        duration: start.elapsed(),
    }
}
