//! Dictionary lookups
//!
//! Defines the Dictionary trait and concrete implementations.

mod word_list;

pub use word_list::WordListDictionary;

/// Language used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Oracle deciding whether a word is spelled correctly in a language
///
/// Lookups must be free of side effects. `Sync` lets the same dictionary be
/// scanned from several threads.
pub trait Dictionary: Sync {
    /// Returns `true` if `word` is not a recognized word in `language`
    fn is_misspelled(&self, word: &str, language: &str) -> bool;
}

/// Adapter turning a `(word, language) -> misspelled` closure into a dictionary
///
/// # Examples
/// ```
/// use word_scramble::dictionary::{Dictionary, FnDictionary};
///
/// let dictionary = FnDictionary(|word: &str, _: &str| word.len() > 5);
/// assert!(!dictionary.is_misspelled("silk", "en"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnDictionary<F>(pub F);

impl<F> Dictionary for FnDictionary<F>
where
    F: Fn(&str, &str) -> bool + Sync,
{
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        (self.0)(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        (**self).is_misspelled(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        (**self).is_misspelled(word, language)
    }
}
