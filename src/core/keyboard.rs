//! Cumulative a-z letter usage for one player's game
//!
//! Statuses only ever move upward: Unused < Absent < Present < Correct.

use super::feedback::{Feedback, LetterStatus};
use super::word::Word;

/// Best status seen so far for a letter of the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KeyStatus {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl From<LetterStatus> for KeyStatus {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Absent => Self::Absent,
            LetterStatus::Present => Self::Present,
            LetterStatus::Correct => Self::Correct,
        }
    }
}

/// Status of all 26 letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keyboard([KeyStatus; 26]);

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the keyboard
    ///
    /// A letter's status is replaced only by a strictly stronger one.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
            if let Some(slot) = self.0.get_mut(usize::from(letter - b'a')) {
                *slot = (*slot).max(KeyStatus::from(status));
            }
        }
    }

    /// Status of a single letter (case-insensitive); non-letters are `Unused`
    #[must_use]
    pub fn status(&self, letter: u8) -> KeyStatus {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.0[usize::from(letter - b'a')]
        } else {
            KeyStatus::Unused
        }
    }

    /// Iterate over (letter, status) from a to z
    pub fn iter(&self) -> impl Iterator<Item = (char, KeyStatus)> + '_ {
        (b'a'..=b'z').zip(self.0.iter().copied()).map(|(l, s)| (char::from(l), s))
    }
}
