//! Word list loading utilities
//!
//! Provides functions to load the dictionary from a file or from in-memory words.

use super::{Dictionary, LoadError};
use crate::core::Word;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the dictionary from a whitespace separated word file
///
/// Words are lowercased. Entries that are not 5 ASCII letters, including
/// entries that are not valid UTF-8, are skipped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, `LoadError::Empty` if it
/// holds no valid words, and `LoadError::OutOfMemory` if the list cannot be
/// allocated.
///
/// # Examples
/// ```no_run
/// use mqtt_wordle::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("/etc/mosquitto/words").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<&[u8]> = content
        .split(u8::is_ascii_whitespace)
        .filter(|entry| !entry.is_empty())
        .collect();
    let mut words = Vec::new();
    words
        .try_reserve_exact(entries.len())
        .map_err(|_| LoadError::OutOfMemory)?;

    let mut skipped = 0usize;
    for entry in entries {
        match Word::from_bytes(entry) {
            Ok(word) => words.push(word),
            Err(e) => {
                skipped += 1;
                debug!(
                    entry = %String::from_utf8_lossy(entry),
                    error = %e,
                    "skipping word list entry"
                );
            }
        }
    }
    if skipped > 0 {
        warn!(skipped, path = %path.display(), "word list had invalid entries");
    }

    build(words)
}

/// Build a dictionary from in-memory words, skipping invalid entries
///
/// # Errors
///
/// Returns `LoadError::Empty` if no entry is a valid word.
///
/// # Examples
/// ```
/// use mqtt_wordle::wordlists::loader::words_from_slice;
///
/// let dictionary = words_from_slice(&["crane", "slate", "toolong"]).unwrap();
/// assert_eq!(dictionary.len(), 2);
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Dictionary, LoadError> {
    build(slice.iter().filter_map(|&s| Word::new(s).ok()).collect())
}

fn build(words: Vec<Word>) -> Result<Dictionary, LoadError> {
    let dictionary = Dictionary::from_words(words)?;
    info!("Wordle: {} words loaded", dictionary.len());
    Ok(dictionary)
}
