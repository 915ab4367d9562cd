//! Word validation engine

use super::config::ValidatorConfig;
use crate::core::{Accepted, RootWord, RuleViolation, can_spell, letter_count, normalize};
use crate::dictionary::Dictionary;
use tracing::{debug, trace};

/// Decides whether a candidate word is an acceptable find
///
/// Rules run in a fixed order and the first one broken is reported:
/// originality, root word (only when disallowed), possibility, reality,
/// length.
pub struct WordValidator<D: Dictionary> {
    dictionary: D,
    config: ValidatorConfig,
}

impl<D: Dictionary> WordValidator<D> {
    /// Create a validator with the default configuration
    pub fn new(dictionary: D) -> Self {
        Self::with_config(dictionary, ValidatorConfig::default())
    }

    /// Create a validator with explicit rule settings
    pub const fn with_config(dictionary: D, config: ValidatorConfig) -> Self {
        Self { dictionary, config }
    }

    /// The rule settings in effect
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The dictionary consulted for real words
    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// True if `word` has not been accepted yet
    #[must_use]
    pub fn is_original<S: AsRef<str>>(&self, word: &str, used_words: &[S]) -> bool {
        !used_words.iter().any(|used| used.as_ref() == word)
    }

    /// True if `word` can be spelled from the root word's letters
    #[must_use]
    pub fn is_possible(&self, word: &str, root_word: &RootWord) -> bool {
        can_spell(word, root_word.text())
    }

    /// True if the dictionary recognizes `word` in the configured language
    #[must_use]
    pub fn is_real(&self, word: &str) -> bool {
        !self.dictionary.is_misspelled(word, &self.config.language)
    }

    /// True if `word` has at least the configured number of letters
    #[must_use]
    pub fn is_long_enough(&self, word: &str) -> bool {
        letter_count(word) >= self.config.min_length
    }

    /// Validate raw player input against the root word and accepted history
    ///
    /// Returns `Ok(None)` when the input is blank after normalization; no rule
    /// is evaluated in that case. Never panics, whatever the input.
    ///
    /// # Errors
    /// Returns the first [`RuleViolation`] the normalized candidate breaks.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{RootWord, RuleKind};
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::validator::WordValidator;
    ///
    /// let validator = WordValidator::new(WordListDictionary::new("en", ["silk", "worm"]));
    /// let root = RootWord::new("silkworm").unwrap();
    /// let used: [&str; 0] = [];
    ///
    /// let accepted = validator.validate(" Silk\n", &root, &used).unwrap().unwrap();
    /// assert_eq!(accepted.word, "silk");
    /// assert_eq!(accepted.length, 4);
    ///
    /// let rejected = validator.validate("silkx", &root, &used).unwrap_err();
    /// assert_eq!(rejected.kind, RuleKind::ImpossibleWord);
    ///
    /// assert_eq!(validator.validate("   ", &root, &used), Ok(None));
    /// ```
    pub fn validate<S: AsRef<str>>(
        &self,
        raw_candidate: &str,
        root_word: &RootWord,
        used_words: &[S],
    ) -> Result<Option<Accepted>, RuleViolation> {
        let word = normalize(raw_candidate);
        if word.is_empty() {
            trace!("ignoring blank candidate");
            return Ok(None);
        }

        self.check_rules(&word, root_word, used_words)
            .inspect_err(|violation| {
                debug!(word = %word, root = %root_word, rule = %violation.kind, "candidate rejected");
            })?;

        Ok(Some(Accepted::new(word)))
    }

    fn check_rules<S: AsRef<str>>(
        &self,
        word: &str,
        root_word: &RootWord,
        used_words: &[S],
    ) -> Result<(), RuleViolation> {
        if !self.is_original(word, used_words) {
            return Err(RuleViolation::duplicate());
        }

        if !self.config.allow_root_word && word == root_word.text() {
            return Err(RuleViolation::root_word());
        }

        if !self.is_possible(word, root_word) {
            return Err(RuleViolation::impossible(root_word.text()));
        }

        if !self.is_real(word) {
            return Err(RuleViolation::unrecognized());
        }

        if !self.is_long_enough(word) {
            return Err(RuleViolation::too_short(self.config.min_length));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RuleKind;
    use crate::dictionary::{FnDictionary, WordListDictionary};
    use proptest::prelude::*;

    const NO_WORDS: [&str; 0] = [];

    fn validator(words: &[&str]) -> WordValidator<WordListDictionary> {
        WordValidator::new(WordListDictionary::new("en", words))
    }

    fn root(text: &str) -> RootWord {
        RootWord::new(text).unwrap()
    }

    fn kind_of(result: Result<Option<Accepted>, RuleViolation>) -> RuleKind {
        result.unwrap_err().kind
    }

    #[test]
    fn accepts_silk_from_silkworm() {
        let v = validator(&["silk"]);
        let accepted = v.validate("silk", &root("silkworm"), &NO_WORDS).unwrap();
        assert_eq!(
            accepted,
            Some(Accepted {
                word: "silk".to_string(),
                length: 4
            })
        );
    }

    #[test]
    fn normalizes_before_checking() {
        let v = validator(&["silk"]);
        let accepted = v.validate("  SILK\n", &root("silkworm"), &NO_WORDS).unwrap();
        assert_eq!(accepted.unwrap().word, "silk");
    }

    #[test]
    fn rejects_letter_outside_root() {
        let v = validator(&["silkx"]);
        assert_eq!(
            kind_of(v.validate("silkx", &root("silkworm"), &NO_WORDS)),
            RuleKind::ImpossibleWord
        );
    }

    #[test]
    fn rejects_unknown_word() {
        let v = WordValidator::new(FnDictionary(|_: &str, _: &str| true));
        assert_eq!(
            kind_of(v.validate("at", &root("cat"), &NO_WORDS)),
            RuleKind::UnrecognizedWord
        );
    }

    #[test]
    fn rejects_short_word() {
        let v = validator(&["a"]);
        assert_eq!(
            kind_of(v.validate("a", &root("cat"), &NO_WORDS)),
            RuleKind::TooShort
        );
    }

    #[test]
    fn rejects_duplicate() {
        let v = validator(&["silk"]);
        assert_eq!(
            kind_of(v.validate("silk", &root("silkworm"), &["silk"])),
            RuleKind::DuplicateWord
        );
    }

    #[test]
    fn duplicate_wins_over_too_short() {
        let v = validator(&["ow"]);
        assert_eq!(
            kind_of(v.validate("ow", &root("silkworm"), &["ow"])),
            RuleKind::DuplicateWord
        );
    }

    #[test]
    fn impossible_wins_over_unrecognized() {
        let v = validator(&[]);
        assert_eq!(
            kind_of(v.validate("zzz", &root("silkworm"), &NO_WORDS)),
            RuleKind::ImpossibleWord
        );
    }

    #[test]
    fn unrecognized_wins_over_too_short() {
        let v = validator(&[]);
        assert_eq!(
            kind_of(v.validate("mw", &root("silkworm"), &NO_WORDS)),
            RuleKind::UnrecognizedWord
        );
    }

    #[test]
    fn blank_input_is_ignored() {
        let v = validator(&[]);
        assert_eq!(v.validate("", &root("cat"), &NO_WORDS), Ok(None));
        assert_eq!(v.validate(" \n\t ", &root("cat"), &NO_WORDS), Ok(None));
    }

    #[test]
    fn blank_input_skips_dictionary() {
        let v = WordValidator::new(FnDictionary(|_: &str, _: &str| -> bool {
            panic!("dictionary must not be consulted")
        }));
        assert_eq!(v.validate("   ", &root("cat"), &NO_WORDS), Ok(None));
    }

    #[test]
    fn root_word_allowed_by_default() {
        let v = validator(&["silkworm"]);
        let accepted = v.validate("silkworm", &root("silkworm"), &NO_WORDS).unwrap();
        assert_eq!(accepted.unwrap().length, 8);
    }

    #[test]
    fn root_word_rejected_when_configured() {
        let config = ValidatorConfig::default().with_allow_root_word(false);
        let v = WordValidator::with_config(WordListDictionary::new("en", ["silkworm"]), config);
        assert_eq!(
            kind_of(v.validate("silkworm", &root("silkworm"), &NO_WORDS)),
            RuleKind::RootWord
        );
    }

    #[test]
    fn duplicate_wins_over_root_word() {
        let config = ValidatorConfig::default().with_allow_root_word(false);
        let v = WordValidator::with_config(WordListDictionary::new("en", ["silkworm"]), config);
        assert_eq!(
            kind_of(v.validate("silkworm", &root("silkworm"), &["silkworm"])),
            RuleKind::DuplicateWord
        );
    }

    #[test]
    fn min_length_is_configurable() {
        let config = ValidatorConfig::default().with_min_length(5);
        let v = WordValidator::with_config(WordListDictionary::new("en", ["silk"]), config);
        let violation = v.validate("silk", &root("silkworm"), &NO_WORDS).unwrap_err();
        assert_eq!(violation.kind, RuleKind::TooShort);
        assert_eq!(violation.message, "Words must be at least 5 letters long.");
    }

    #[test]
    fn language_is_passed_to_dictionary() {
        let config = ValidatorConfig::default().with_language("fr");
        let dictionary = FnDictionary(|word: &str, language: &str| {
            !(language == "fr" && word == "lion")
        });
        let v = WordValidator::with_config(dictionary, config);
        assert!(v.validate("lion", &root("national"), &NO_WORDS).is_ok());
    }

    #[test]
    fn is_original_uses_exact_match() {
        let v = validator(&[]);
        assert!(v.is_original("silk", &["worm", "milk"]));
        assert!(!v.is_original("silk", &["worm", "silk"]));
        assert!(v.is_original("silk", &["SILK"]));
    }

    #[test]
    fn is_long_enough_counts_letters() {
        let v = validator(&[]);
        assert!(v.is_long_enough("abc"));
        assert!(!v.is_long_enough("ab"));
        assert!(v.is_long_enough("ñuú"));
        assert!(!v.is_long_enough("ne\u{301}"));
        assert!(v.is_long_enough("ne\u{301}e"));
    }

    #[test]
    fn decomposed_accent_counts_as_one_letter() {
        let v = validator(&["ne\u{301}"]);
        let violation = v.validate("ne\u{301}", &root("ne\u{301}t"), &NO_WORDS).unwrap_err();
        assert_eq!(violation.kind, RuleKind::TooShort);

        let v = validator(&["ne\u{301}t"]);
        let accepted = v.validate("ne\u{301}t", &root("ne\u{301}t"), &NO_WORDS).unwrap();
        assert_eq!(accepted.unwrap().length, 3);
    }

    #[test]
    fn bare_letter_cannot_use_accented_one() {
        let v = validator(&["ne"]);
        assert!(!v.is_possible("ne", &root("ce\u{301}n")));
        assert_eq!(
            kind_of(v.validate("ne", &root("ce\u{301}n"), &NO_WORDS)),
            RuleKind::ImpossibleWord
        );
    }

    #[test]
    fn odd_input_never_panics() {
        let v = validator(&["silk"]);
        for input in ["123", "!!!", "日本語", "ñandú", "\u{200b}", "silk worm", "\0"] {
            let first = v.validate(input, &root("silkworm"), &NO_WORDS);
            assert!(first.is_err() || first == Ok(None), "input {input:?}");
        }
    }

    proptest! {
        #[test]
        fn validate_is_idempotent(candidate in "\\PC{0,10}", used in prop::collection::vec("[a-z]{1,6}", 0..5)) {
            let v = validator(&["silk", "worm", "milk", "owl"]);
            let root_word = root("silkworm");
            let first = v.validate(&candidate, &root_word, &used);
            let second = v.validate(&candidate, &root_word, &used);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn duplicates_always_report_duplicate(word in "[a-z]{1,8}") {
            let v = validator(&[]);
            let result = v.validate(&word, &root("silkworm"), &[word.clone()]);
            prop_assert_eq!(result.unwrap_err().kind, RuleKind::DuplicateWord);
        }
    }
}
