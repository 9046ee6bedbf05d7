//! Response text sent back to a player
//!
//! The escape sequences are written out literally so the published bytes are
//! identical on every host, whatever the terminal or `NO_COLOR` say.

use crate::core::{Feedback, KeyStatus, Keyboard, LetterStatus, Word};
use crate::game::session::MAX_ATTEMPTS;
use std::fmt::Write;

const GREEN: &str = "\x1b[32;1m";
const YELLOW: &str = "\x1b[33;1m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

pub const GAME_OVER: &str = "Wait until tomorrow for the next word!";
pub const WRONG_LENGTH: &str = "Word must be 5 letters long";
pub const NOT_IN_LIST: &str = "Word not found in list";
pub const INTERNAL_ERROR: &str = "Internal error";

fn paint(out: &mut String, color: Option<&str>, letter: char) {
    match color {
        Some(code) => {
            let _ = write!(out, "{code}{letter}{RESET}");
        }
        None => out.push(letter),
    }
}

/// Append the colorized guess, e.g. `"t" + green "r" + ...`
///
/// Absent letters are left uncolored.
pub fn push_guess(out: &mut String, guess: &Word, feedback: &Feedback) {
    for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
        let color = match status {
            LetterStatus::Correct => Some(GREEN),
            LetterStatus::Present => Some(YELLOW),
            LetterStatus::Absent => None,
        };
        paint(out, color, char::from(letter));
    }
}

/// Append `" (abc...z)"` with every letter colored by its cumulative status
///
/// Unlike the guess line, absent letters are shown in blue here.
pub fn push_keyboard(out: &mut String, keyboard: &Keyboard) {
    out.push_str(" (");
    for (letter, status) in keyboard.iter() {
        let color = match status {
            KeyStatus::Correct => Some(GREEN),
            KeyStatus::Present => Some(YELLOW),
            KeyStatus::Absent => Some(BLUE),
            KeyStatus::Unused => None,
        };
        paint(out, color, letter);
    }
    out.push(')');
}

/// Append the emoji grid, one row per attempt
pub fn push_grid(out: &mut String, attempts: &[Word], answer: &Word) {
    for attempt in attempts {
        out.push_str(&Feedback::score(attempt, answer).to_emoji());
        out.push('\n');
    }
}

/// Append the win banner and shareable block
pub fn push_win(out: &mut String, day_index: usize, attempts: &[Word], answer: &Word) {
    out.push_str("\n\nWell done!\n\n");
    let _ = writeln!(out, "MQTT Wordle {day_index} {}/{MAX_ATTEMPTS}", attempts.len());
    push_grid(out, attempts, answer);
}

/// Append the loss banner and shareable block
pub fn push_loss(out: &mut String, day_index: usize, attempts: &[Word], answer: &Word) {
    out.push_str("\n\nOh dear!\n\n");
    let _ = writeln!(out, "MQTT Wordle {day_index} x/{MAX_ATTEMPTS}");
    push_grid(out, attempts, answer);
}

/// Render the full reply for a scored guess
///
/// `attempts` already includes the guess being rendered as its last element.
#[must_use]
pub fn render_scored(
    day_index: usize,
    attempts: &[Word],
    keyboard: &Keyboard,
    feedback: &Feedback,
    answer: &Word,
) -> String {
    let mut out = String::with_capacity(512);
    let Some(guess) = attempts.last() else {
        return out;
    };

    let _ = write!(out, "{}/{MAX_ATTEMPTS}: ", attempts.len());
    push_guess(&mut out, guess, feedback);

    if feedback.is_win() {
        push_win(&mut out, day_index, attempts, answer);
    } else {
        push_keyboard(&mut out, keyboard);
        if attempts.len() == MAX_ATTEMPTS {
            push_loss(&mut out, day_index, attempts, answer);
        }
    }
    out
}
