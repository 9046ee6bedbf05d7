//! Score command
//!
//! Scores an arbitrary guess against an arbitrary answer, outside any session.

use crate::core::{Feedback, Word, WordError};
use crate::output::response::push_guess;

/// A scored pair, ready for display
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
    /// Guess letters colored the same way as a game reply
    pub colored: String,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns `WordError` if either word is not 5 ASCII letters.
pub fn score_pair(guess: &str, answer: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let feedback = Feedback::score(&guess, &answer);
    let mut colored = String::new();
    push_guess(&mut colored, &guess, &feedback);

    Ok(ScoreResult {
        guess,
        answer,
        feedback,
        colored,
    })
}
