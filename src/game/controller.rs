//! Processes one guess at a time against the day's answer
//!
//! All mutable state (current day and the session store) sits behind one mutex.
//! A guess checks for a day rollover, validates, scores, mutates and renders
//! while holding it, so a rollover never interleaves with scoring.

use super::epoch::{Clock, current_index};
use super::session::{ClientSession, SessionState, SessionStore};
use crate::core::{Feedback, Word};
use crate::output::response;
use crate::wordlists::Dictionary;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Why a guess was not scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The player already won or used all attempts today
    GameOver,
    WrongLength,
    NotInWordList,
}

impl Rejection {
    /// Message shown to the player
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::GameOver => response::GAME_OVER,
            Self::WrongLength => response::WRONG_LENGTH,
            Self::NotInWordList => response::NOT_IN_LIST,
        }
    }
}

/// What happened to a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Guess was scored; carries the session state afterwards
    Scored(SessionState),
    Rejected(Rejection),
    /// The session could not be created
    Internal,
}

/// Reply text plus what happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub text: String,
    pub kind: OutcomeKind,
}

impl GuessOutcome {
    fn rejected(rejection: Rejection) -> Self {
        Self {
            text: rejection.message().to_owned(),
            kind: OutcomeKind::Rejected(rejection),
        }
    }
}

struct GameState {
    day_index: usize,
    sessions: SessionStore,
}

/// Owns the dictionary, the clock and every player's session
pub struct GameController {
    dictionary: Dictionary,
    clock: Box<dyn Clock>,
    state: Mutex<GameState>,
}

impl GameController {
    #[must_use]
    pub fn new(dictionary: Dictionary, clock: impl Clock + 'static) -> Self {
        let day_index = current_index(clock.now(), dictionary.len());
        info!(
            day_index,
            words = dictionary.len(),
            "game controller ready"
        );
        Self {
            dictionary,
            clock: Box::new(clock),
            state: Mutex::new(GameState {
                day_index,
                sessions: SessionStore::new(),
            }),
        }
    }

    // Sessions are only mutated after every check has passed, so state behind
    // a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn roll_over(&self, state: &mut GameState) {
        let today = current_index(self.clock.now(), self.dictionary.len());
        if today != state.day_index {
            info!(
                from = state.day_index,
                to = today,
                dropped = state.sessions.len(),
                "new day, clearing sessions"
            );
            state.sessions.clear_all();
            state.day_index = today;
        }
    }

    /// Adopt a new day if the clock has moved into one
    ///
    /// Returns the current day index.
    pub fn refresh_day(&self) -> usize {
        let mut state = self.lock();
        self.roll_over(&mut state);
        state.day_index
    }

    /// Process one guess from `identity`
    ///
    /// The outcome text is always meant for the player, whether or not the
    /// guess was scored. A rejected guess never changes the session.
    pub fn submit_guess(&self, identity: &str, payload: &[u8]) -> GuessOutcome {
        let mut state = self.lock();
        self.roll_over(&mut state);
        let day_index = state.day_index;
        let answer = self.dictionary.word_at(day_index);

        let Ok(session) = state.sessions.get_or_create(identity) else {
            warn!(identity, "could not allocate session");
            return GuessOutcome {
                text: response::INTERNAL_ERROR.to_owned(),
                kind: OutcomeKind::Internal,
            };
        };

        let guess = match self.validate(session, payload) {
            Ok(guess) => guess,
            Err(rejection) => {
                debug!(identity, ?rejection, "guess rejected");
                return GuessOutcome::rejected(rejection);
            }
        };

        let feedback = Feedback::score(&guess, answer);
        session.record(guess, &feedback);
        let text = response::render_scored(
            day_index,
            session.attempts(),
            session.keyboard(),
            &feedback,
            answer,
        );
        let outcome = session.state();
        debug!(
            identity,
            attempt = session.attempt_count(),
            ?outcome,
            "guess scored"
        );

        GuessOutcome {
            text,
            kind: OutcomeKind::Scored(outcome),
        }
    }

    fn validate(&self, session: &ClientSession, payload: &[u8]) -> Result<Word, Rejection> {
        if session.is_finished() {
            return Err(Rejection::GameOver);
        }
        if payload.len() != crate::core::WORD_LENGTH {
            return Err(Rejection::WrongLength);
        }
        Word::from_bytes(payload)
            .ok()
            .filter(|word| self.dictionary.contains(word))
            .ok_or(Rejection::NotInWordList)
    }

    /// Current day index, without checking the clock
    #[must_use]
    pub fn day_index(&self) -> usize {
        self.lock().day_index
    }

    /// Answer for the current day index
    #[must_use]
    pub fn answer(&self) -> Word {
        self.dictionary.word_at(self.day_index()).clone()
    }

    /// Copy of a player's session, if they have one today
    #[must_use]
    pub fn session_snapshot(&self, identity: &str) -> Option<ClientSession> {
        self.lock().sessions.get(identity).cloned()
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.lock().sessions.len()
    }

    /// Count sessions in each state
    #[must_use]
    pub fn state_counts(&self) -> (usize, usize, usize) {
        let state = self.lock();
        state
            .sessions
            .iter()
            .fold((0, 0, 0), |(playing, won, lost), (_, s)| match s.state() {
                SessionState::InProgress => (playing + 1, won, lost),
                SessionState::Won => (playing, won + 1, lost),
                SessionState::Lost => (playing, won, lost + 1),
            })
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }
}
