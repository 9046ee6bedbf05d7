//! Per-player game state for the current day

use crate::core::{Feedback, Keyboard, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Guesses allowed per player per day
pub const MAX_ATTEMPTS: usize = 6;

/// Where a player's game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

/// One player's game for the current day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSession {
    attempts: Vec<Word>,
    keyboard: Keyboard,
    won: bool,
}

impl ClientSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Guesses scored so far, in submission order
    #[must_use]
    pub fn attempts(&self) -> &[Word] {
        &self.attempts
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.won {
            SessionState::Won
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            SessionState::Lost
        } else {
            SessionState::InProgress
        }
    }

    /// True once the player has won or used every attempt
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state() != SessionState::InProgress
    }

    /// Record a scored guess
    ///
    /// Callers must check [`is_finished`](Self::is_finished) first; a finished
    /// session ignores further guesses.
    pub(crate) fn record(&mut self, guess: Word, feedback: &Feedback) {
        if self.is_finished() {
            return;
        }
        self.keyboard.record(&guess, feedback);
        self.attempts.push(guess);
        if feedback.is_win() {
            self.won = true;
        }
    }
}

/// Allocation failure while creating a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternalError;

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Internal error")
    }
}

impl std::error::Error for InternalError {}

/// Sessions keyed by client identity
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: FxHashMap<String, ClientSession>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a session, creating an empty one if the identity is new
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the store cannot grow to hold a new session.
    /// The store is left unchanged in that case.
    pub fn get_or_create(&mut self, identity: &str) -> Result<&mut ClientSession, InternalError> {
        if !self.sessions.contains_key(identity) {
            self.sessions.try_reserve(1).map_err(|_| InternalError)?;
            self.sessions
                .insert(identity.to_owned(), ClientSession::new());
        }
        self.sessions.get_mut(identity).ok_or(InternalError)
    }

    #[must_use]
    pub fn get(&self, identity: &str) -> Option<&ClientSession> {
        self.sessions.get(identity)
    }

    /// Drop every session
    pub fn clear_all(&mut self) {
        self.sessions.clear();
        self.sessions.shrink_to_fit();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Iterate over (identity, session) in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClientSession)> {
        self.sessions.iter().map(|(k, v)| (k.as_str(), v))
    }
}
