//! Today command
//!
//! Reports which word of the rotation is active and when the next one starts.

use crate::core::Word;
use crate::game::GameController;
use crate::game::epoch::{day_number, next_rollover};
use chrono::{DateTime, TimeDelta, Utc};

/// Snapshot of the current day
pub struct TodayReport {
    pub day_index: usize,
    pub day_number: i64,
    pub word_count: usize,
    pub next_word_at: DateTime<Utc>,
    pub time_left: TimeDelta,
    pub answer: Option<Word>,
}

/// Describe the current day, optionally including the answer
#[must_use]
pub fn today(controller: &GameController, reveal: bool) -> TodayReport {
    let now = controller.now();
    let day_index = controller.refresh_day();
    let next_word_at = next_rollover(now);

    TodayReport {
        day_index,
        day_number: day_number(now),
        word_count: controller.dictionary().len(),
        next_word_at,
        time_left: next_word_at - now,
        answer: reveal.then(|| controller.dictionary().word_at(day_index).clone()),
    }
}
