//! Word list for the daily game
//!
//! The dictionary is both the ordered answer rotation and the set of accepted
//! guesses. It is loaded once at startup and never changes afterwards.

pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub use loader::{load_from_file, words_from_slice};

/// Immutable ordered word list with a membership index
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    pub(crate) fn from_words(words: Vec<Word>) -> Result<Self, LoadError> {
        if words.is_empty() {
            return Err(LoadError::Empty);
        }
        let index = words.iter().cloned().collect();
        Ok(Self { words, index })
    }

    /// Check whether a word is accepted as a guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Number of entries in the answer rotation
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a loaded dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Answer for a day index
    ///
    /// # Panics
    /// Panics if `index >= len()`. Indices from
    /// [`current_index`](crate::game::epoch::current_index) are always in range.
    #[inline]
    #[must_use]
    pub fn word_at(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// All words in file order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// Failure to load the word list at startup
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    OutOfMemory,
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read word list {}: {source}", path.display())
            }
            Self::OutOfMemory => write!(f, "out of memory while loading word list"),
            Self::Empty => write!(f, "word list contains no valid 5-letter words"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::OutOfMemory | Self::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_case_insensitive_via_word() {
        let dictionary = words_from_slice(&["crane", "slate"]).unwrap();
        assert!(dictionary.contains(&Word::new("CRANE").unwrap()));
        assert!(!dictionary.contains(&Word::new("irate").unwrap()));
    }

    #[test]
    fn word_at_follows_input_order() {
        let dictionary = words_from_slice(&["crane", "slate", "irate"]).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.word_at(0).as_str(), "crane");
        assert_eq!(dictionary.word_at(2).as_str(), "irate");
    }

    #[test]
    fn duplicates_keep_rotation_order() {
        let dictionary = words_from_slice(&["crane", "slate", "crane"]).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.word_at(2).as_str(), "crane");
    }

    #[test]
    fn empty_dictionary_is_rejected() {
        assert!(matches!(words_from_slice(&[]), Err(LoadError::Empty)));
    }
}
