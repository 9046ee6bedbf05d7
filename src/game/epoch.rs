//! Day numbering and answer selection
//!
//! The answer for a day is `words[day % len]`, where `day` counts whole UTC days
//! since [`EPOCH_START`]. No timezone adjustment is applied.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Mutex;
use std::sync::PoisonError;

/// Reference timestamp for day zero (2022-02-20T00:00:00Z)
///
/// Changing this reshuffles the answer for every future day.
pub const EPOCH_START: i64 = 1_645_315_200;

/// Length of one game day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days elapsed since [`EPOCH_START`], negative before it
#[must_use]
pub fn day_number(now: DateTime<Utc>) -> i64 {
    (now.timestamp() - EPOCH_START).div_euclid(SECONDS_PER_DAY)
}

/// Index of the current answer in a dictionary of `word_count` words
///
/// # Panics
/// Panics if `word_count` is zero. A loaded dictionary is never empty.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use mqtt_wordle::game::epoch::{EPOCH_START, current_index};
///
/// let day_zero = DateTime::from_timestamp(EPOCH_START, 0).unwrap();
/// assert_eq!(current_index(day_zero, 100), 0);
/// ```
#[must_use]
pub fn current_index(now: DateTime<Utc>, word_count: usize) -> usize {
    let count = i64::try_from(word_count).unwrap_or(i64::MAX);
    // rem_euclid is in [0, count), so the conversion back cannot fail.
    usize::try_from(day_number(now).rem_euclid(count)).unwrap_or_default()
}

/// Instant at which the next word becomes active
#[must_use]
pub fn next_rollover(now: DateTime<Utc>) -> DateTime<Utc> {
    let next_day_start = EPOCH_START + (day_number(now) + 1) * SECONDS_PER_DAY;
    DateTime::from_timestamp(next_day_start, 0).unwrap_or(now + TimeDelta::days(1))
}

/// Source of wall-clock time for the game
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// A clock set to the start of the given day
    #[must_use]
    pub fn at_day(day: i64) -> Self {
        let start = DateTime::from_timestamp(EPOCH_START + day * SECONDS_PER_DAY, 0)
            .unwrap_or(DateTime::UNIX_EPOCH);
        Self::new(start)
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(timestamp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(timestamp, 0).unwrap()
    }

    #[test]
    fn epoch_start_is_day_zero() {
        assert_eq!(day_number(at(EPOCH_START)), 0);
        assert_eq!(current_index(at(EPOCH_START), 10), 0);
    }

    #[test]
    fn same_bucket_same_index() {
        let start = EPOCH_START + 3 * SECONDS_PER_DAY;
        let first = current_index(at(start), 100);
        let last = current_index(at(start + SECONDS_PER_DAY - 1), 100);

        assert_eq!(first, 3);
        assert_eq!(first, last);
    }

    #[test]
    fn next_bucket_advances() {
        let start = EPOCH_START + 3 * SECONDS_PER_DAY;
        assert_eq!(current_index(at(start + SECONDS_PER_DAY), 100), 4);
    }

    #[test]
    fn index_wraps_at_word_count() {
        let day_ten = EPOCH_START + 10 * SECONDS_PER_DAY;
        assert_eq!(current_index(at(day_ten), 7), 3);
    }

    #[test]
    fn before_epoch_floors_and_stays_in_range() {
        assert_eq!(day_number(at(EPOCH_START - 1)), -1);
        assert_eq!(current_index(at(EPOCH_START - 1), 7), 6);
    }

    #[test]
    fn next_rollover_is_next_day_start() {
        let now = at(EPOCH_START + 5 * SECONDS_PER_DAY + 1234);
        assert_eq!(
            next_rollover(now),
            at(EPOCH_START + 6 * SECONDS_PER_DAY)
        );
    }

    #[test]
    fn fixed_clock_moves_only_when_told() {
        let clock = FixedClock::at_day(2);
        assert_eq!(day_number(clock.now()), 2);

        clock.advance(TimeDelta::hours(23));
        assert_eq!(day_number(clock.now()), 2);

        clock.advance(TimeDelta::hours(1));
        assert_eq!(day_number(clock.now()), 3);

        clock.set(at(EPOCH_START));
        assert_eq!(day_number(clock.now()), 0);
    }
}
