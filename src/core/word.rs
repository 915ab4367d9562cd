//! Word scramble word representation
//!
//! Normalization of raw player input and the root word whose letters every
//! candidate must be spelled from.

use std::fmt;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Normalize raw input the way every candidate is normalized before validation
///
/// Lowercases and trims whitespace (including newlines) from both ends.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Apple\n"), "apple");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Count the letters in `word` as a reader sees them
///
/// A letter is an extended grapheme cluster, so a base letter followed by a
/// combining accent counts once.
///
/// # Examples
/// ```
/// use word_scramble::core::letter_count;
///
/// assert_eq!(letter_count("silk"), 4);
/// assert_eq!(letter_count("ne\u{301}"), 2);
/// ```
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.graphemes(true).count()
}

/// Check whether `word` can be spelled from the letters of `root`
///
/// Letters are grapheme clusters, compared exactly. Each letter of the root
/// can be used at most once. Letters are consumed
/// from a working copy of the root in the order they appear in `word`, and
/// the first letter without a remaining match fails the check.
///
/// # Examples
/// ```
/// use word_scramble::core::can_spell;
///
/// assert!(can_spell("silk", "silkworm"));
/// assert!(!can_spell("silkx", "silkworm"));
/// assert!(!can_spell("sills", "silkworm")); // only one 'l' and one 's'
/// ```
#[must_use]
pub fn can_spell(word: &str, root: &str) -> bool {
    let mut remaining: Vec<&str> = root.graphemes(true).collect();

    for letter in word.graphemes(true) {
        match remaining.iter().position(|&g| g == letter) {
            Some(index) => {
                remaining.remove(index);
            }
            None => return false,
        }
    }

    true
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Root word must not be empty")]
    Empty,
}

/// The word a game is built around
///
/// Immutable for the lifetime of a session. Its letters form the pool every
/// candidate is spelled from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
}

impl RootWord {
    /// Word used when no usable root word is available
    pub const DEFAULT: &'static str = "silkworm";

    /// Create a root word from raw text
    ///
    /// The text is normalized first.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing remains after normalization.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new(" SilkWorm ").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("   ").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = normalize(text);
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        letter_count(&self.text)
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether `word` can be spelled from this root's letters
    #[inline]
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        can_spell(word, &self.text)
    }
}

impl Default for RootWord {
    fn default() -> Self {
        Self {
            text: Self::DEFAULT.to_string(),
        }
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
