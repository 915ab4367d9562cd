//! Game session state

use crate::core::{Accepted, RootWord, RuleViolation};
use crate::dictionary::Dictionary;
use crate::validator::WordValidator;
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::info;

/// One game: a root word, the words found so far, and the score
///
/// Found words are kept most recent first and never repeat.
pub struct GameSession<D: Dictionary> {
    validator: WordValidator<D>,
    root_word: RootWord,
    used_words: Vec<String>,
    score: usize,
}

impl<D: Dictionary> GameSession<D> {
    /// Create a session on the default root word
    ///
    /// Call [`start`](Self::start) to pick a random root word.
    pub fn new(validator: WordValidator<D>) -> Self {
        Self::with_root(validator, RootWord::default())
    }

    /// Create a session on a fixed root word
    pub const fn with_root(validator: WordValidator<D>, root_word: RootWord) -> Self {
        Self {
            validator,
            root_word,
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Start a new game with a random root word from `word_list`
    ///
    /// Blank entries are skipped. Falls back to
    /// [`RootWord::DEFAULT`] when nothing usable remains.
    pub fn start<S: AsRef<str>>(&mut self, word_list: &[S]) {
        self.start_with_rng(word_list, &mut rand::rng());
    }

    /// Like [`start`](Self::start) with a caller-provided random source
    pub fn start_with_rng<S, R>(&mut self, word_list: &[S], rng: &mut R)
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let candidates: Vec<RootWord> = word_list
            .iter()
            .filter_map(|w| RootWord::new(w.as_ref()).ok())
            .collect();

        let root_word = candidates.choose(rng).cloned().unwrap_or_default();
        self.restart(root_word);
    }

    /// Start a new game on a specific root word
    pub fn restart(&mut self, root_word: RootWord) {
        info!(root = %root_word, "starting game");
        self.root_word = root_word;
        self.used_words.clear();
        self.score = 0;
    }

    /// Submit raw player input
    ///
    /// Accepted words are recorded and scored. Blank input returns `Ok(None)`
    /// and changes nothing.
    ///
    /// # Errors
    /// Returns the [`RuleViolation`] that rejected the word; the session is
    /// left unchanged.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::session::GameSession;
    /// use word_scramble::validator::WordValidator;
    ///
    /// let validator = WordValidator::new(WordListDictionary::new("en", ["silk", "worm"]));
    /// let mut game = GameSession::with_root(validator, RootWord::new("silkworm").unwrap());
    ///
    /// game.submit("silk").unwrap();
    /// game.submit("Worm").unwrap();
    /// assert_eq!(game.used_words(), ["worm", "silk"]);
    /// assert_eq!(game.score(), 8);
    /// assert!(game.submit("silk").is_err());
    /// ```
    pub fn submit(&mut self, raw_candidate: &str) -> Result<Option<Accepted>, RuleViolation> {
        let outcome = self
            .validator
            .validate(raw_candidate, &self.root_word, &self.used_words)?;

        if let Some(accepted) = &outcome {
            self.used_words.insert(0, accepted.word.clone());
            self.score += accepted.length;
            info!(word = %accepted.word, score = self.score, "word accepted");
        }

        Ok(outcome)
    }

    /// The root word of the current game
    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Total letters across accepted words
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// The validator applied to submissions
    #[must_use]
    pub const fn validator(&self) -> &WordValidator<D> {
        &self.validator
    }
}
