//! Text output
//!
//! `response` builds the bytes published back to players; `display` prints
//! command results to the local terminal.

pub mod display;
pub mod formatters;
pub mod response;

pub use display::{print_play_banner, print_score_result, print_simulation_result, print_today};
