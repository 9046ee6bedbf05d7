//! Command implementations

pub mod play;
pub mod score;
pub mod simulate;
pub mod today;

pub use play::{PlayConfig, run_play};
pub use score::{ScoreResult, score_pair};
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
pub use today::{TodayReport, today};
