//! Per-letter feedback for a guess against the day's answer
//!
//! Each position is classified as one of:
//! - Correct (right letter, right position)
//! - Present (letter occurs somewhere in the answer)
//! - Absent (letter not in the answer)
//!
//! Present is a plain containment check and is not limited by how often the
//! letter occurs in the answer: guessing SPEED against CRANE marks both E's.

use super::word::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Square glyph used in the shareable result grid
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Score `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches as correct
    /// 2. Second pass: every other position is present if the letter appears
    ///    anywhere in the answer, absent otherwise
    ///
    /// # Examples
    /// ```
    /// use mqtt_wordle::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&guess, &answer);
    ///
    /// assert_eq!(feedback.statuses(), &[Absent, Correct, Correct, Present, Correct]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];

        for (status, (g, a)) in result
            .iter_mut()
            .zip(guess.letters().iter().zip(answer.letters()))
        {
            if g == a {
                *status = LetterStatus::Correct;
            }
        }

        for (status, &g) in result.iter_mut().zip(guess.letters()) {
            if *status != LetterStatus::Correct && answer.has_letter(g) {
                *status = LetterStatus::Present;
            }
        }

        Self(result)
    }

    /// Per-position statuses, in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Render as one row of the shareable grid, e.g. "⬜🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}
