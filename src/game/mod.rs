//! Daily game: answer rotation, player sessions and guess processing

pub mod controller;
pub mod epoch;
pub mod session;

pub use controller::{GameController, GuessOutcome, OutcomeKind, Rejection};
pub use epoch::{Clock, FixedClock, SystemClock};
pub use session::{ClientSession, InternalError, MAX_ATTEMPTS, SessionState, SessionStore};
