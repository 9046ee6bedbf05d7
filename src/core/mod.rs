//! Core domain types for the game
//!
//! This module contains the pure domain types: words, per-guess feedback and the
//! cumulative keyboard. Nothing here knows about players, days or transports.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use keyboard::{KeyStatus, Keyboard};
pub use word::{WORD_LENGTH, Word, WordError};
