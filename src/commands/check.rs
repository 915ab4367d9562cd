//! Word checking command
//!
//! Runs a list of words through a fresh game on a given root word.

use crate::core::{Accepted, RootWord, RuleViolation, WordError};
use crate::dictionary::Dictionary;
use crate::session::GameSession;
use crate::validator::WordValidator;

/// Configuration for checking words
pub struct CheckConfig {
    /// Root word to play on
    pub root: String,
    /// Words to submit, in order
    pub words: Vec<String>,
}

impl CheckConfig {
    /// Check `words` against `root`
    #[must_use]
    pub const fn new(root: String, words: Vec<String>) -> Self {
        Self { root, words }
    }
}

/// Result of checking a list of words
pub struct CheckResult {
    /// Normalized root word
    pub root: String,
    /// One entry per submitted word
    pub steps: Vec<CheckStep>,
    /// Final score
    pub score: usize,
    /// Accepted words, most recent first
    pub used_words: Vec<String>,
}

/// Outcome for a single submitted word
pub struct CheckStep {
    /// The word as given
    pub input: String,
    /// What validation decided
    pub outcome: Result<Option<Accepted>, RuleViolation>,
    /// Score once this word was handled
    pub score_after: usize,
}

impl CheckResult {
    /// Number of words that were accepted
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.used_words.len()
    }
}

/// Submit each word in order to a new game on the configured root
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn check_words<D: Dictionary>(
    config: CheckConfig,
    validator: WordValidator<D>,
) -> Result<CheckResult, WordError> {
    let root_word = RootWord::new(&config.root)?;
    let mut session = GameSession::with_root(validator, root_word);

    let steps = config
        .words
        .into_iter()
        .map(|input| {
            let outcome = session.submit(&input);
            CheckStep {
                input,
                outcome,
                score_after: session.score(),
            }
        })
        .collect();

    Ok(CheckResult {
        root: session.root_word().text().to_string(),
        steps,
        score: session.score(),
        used_words: session.used_words().to_vec(),
    })
}
