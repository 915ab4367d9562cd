//! Dictionary backed by an in-memory word list

use super::Dictionary;
use crate::core::normalize;
use rustc_hash::FxHashSet;

/// Set of known words for a single language
///
/// Words are normalized on insertion. Lookups in any other language report
/// every word as misspelled.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any sequence of words
    ///
    /// Blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::new("en", ["Silk", "worm", ""]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(!dictionary.is_misspelled("silk", "en"));
    /// assert!(dictionary.is_misspelled("silk", "de"));
    /// ```
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.to_string(),
            words,
        }
    }

    /// Language this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// True if `word` is in the list, compared exactly
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over every known word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the list holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        !language.eq_ignore_ascii_case(&self.language) || !self.contains(word)
    }
}
