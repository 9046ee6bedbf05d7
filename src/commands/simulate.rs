//! Simulate command
//!
//! Plays many simulated clients concurrently through the broker plugin.

use crate::broker::{Access, AclCheck, Publisher, WordlePlugin};
use crate::game::{MAX_ATTEMPTS, SessionState};
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Chance that a simulated client sends a malformed guess
const MALFORMED_RATE: f64 = 0.1;

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub clients: usize,
    pub seed: u64,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub clients: usize,
    pub writes: usize,
    pub replies: usize,
    /// `wins_by_attempt[n]` counts clients that won on guess `n + 1`
    pub wins_by_attempt: [usize; MAX_ATTEMPTS],
    pub losses: usize,
    pub unfinished: usize,
    pub duration: Duration,
    pub writes_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn wins(&self) -> usize {
        self.wins_by_attempt.iter().sum()
    }
}

/// Counts replies without keeping them
#[derive(Default)]
struct ReplyCounter(AtomicUsize);

impl Publisher for ReplyCounter {
    fn publish(&self, _client_id: &str, _topic: &str, _payload: &str) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

struct ClientReport {
    writes: usize,
    state: Option<SessionState>,
    attempts: usize,
}

fn play_client(plugin: &WordlePlugin, publisher: &ReplyCounter, id: usize, seed: u64) -> ClientReport {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(id as u64));
    let name = format!("sim-{id}");
    let address = format!("10.{}.{}.{}", (id >> 16) & 0xff, (id >> 8) & 0xff, id & 0xff);
    let words = plugin.controller().dictionary().words();
    let mut writes = 0;

    plugin.acl_check(
        &AclCheck {
            client_id: &name,
            address: &address,
            topic: plugin.topic(),
            access: Access::Subscribe,
            payload: &[],
        },
        publisher,
    );

    // Upper bound on writes; a client normally finishes within a handful.
    while writes < MAX_ATTEMPTS * 10 {
        let finished = plugin
            .controller()
            .session_snapshot(&address)
            .is_some_and(|s| s.is_finished());
        if finished {
            break;
        }

        let payload: &[u8] = if rng.random_bool(MALFORMED_RATE) {
            b"oops"
        } else {
            words.choose(&mut rng).map_or(&b""[..], |w| w.letters().as_slice())
        };

        plugin.acl_check(
            &AclCheck {
                client_id: &name,
                address: &address,
                topic: plugin.topic(),
                access: Access::Write,
                payload,
            },
            publisher,
        );
        writes += 1;
    }

    let session = plugin.controller().session_snapshot(&address);
    ClientReport {
        writes,
        state: session.as_ref().map(crate::game::ClientSession::state),
        attempts: session.map_or(0, |s| s.attempt_count()),
    }
}

/// Run `config.clients` simulated players in parallel
///
/// Each client guesses random dictionary words until its game is over. The
/// same seed always produces the same guesses per client.
pub fn run_simulation(
    plugin: &WordlePlugin,
    config: &SimulationConfig,
    progress: Option<&ProgressBar>,
) -> SimulationResult {
    let start = Instant::now();
    let publisher = ReplyCounter::default();

    let reports: Vec<ClientReport> = (0..config.clients)
        .into_par_iter()
        .map(|id| {
            let report = play_client(plugin, &publisher, id, config.seed);
            if let Some(bar) = progress {
                bar.inc(1);
            }
            report
        })
        .collect();

    let duration = start.elapsed();
    let mut result = SimulationResult {
        clients: config.clients,
        writes: 0,
        replies: publisher.0.load(Ordering::Relaxed),
        wins_by_attempt: [0; MAX_ATTEMPTS],
        losses: 0,
        unfinished: 0,
        duration,
        writes_per_second: 0.0,
    };

    for report in &reports {
        result.writes += report.writes;
        if report.state != Some(SessionState::Won) {
            continue;
        }
        if let Some(slot) = result.wins_by_attempt.get_mut(report.attempts.saturating_sub(1)) {
            *slot += 1;
        }
    }
    // A client that never got a session counts as unfinished.
    let (_, won, lost) = plugin.controller().state_counts();
    result.losses = lost;
    result.unfinished = config.clients.saturating_sub(won + lost);
    result.writes_per_second = result.writes as f64 / duration.as_secs_f64().max(f64::EPSILON);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::DEFAULT_TOPIC;
    use crate::game::{FixedClock, GameController};
    use crate::wordlists::words_from_slice;
    use std::sync::Arc;

    fn plugin(words: &[&str]) -> WordlePlugin {
        let controller = GameController::new(words_from_slice(words).unwrap(), FixedClock::at_day(0));
        WordlePlugin::new(Arc::new(controller), DEFAULT_TOPIC)
    }

    #[test]
    fn every_client_finishes() {
        let plugin = plugin(&["crane", "slate", "irate", "trace", "apple"]);
        let result = run_simulation(&plugin, &SimulationConfig { clients: 40, seed: 7 }, None);

        assert_eq!(result.clients, 40);
        assert_eq!(result.unfinished, 0);
        assert_eq!(result.wins() + result.losses, 40);
        assert_eq!(plugin.controller().session_count(), 40);
    }

    #[test]
    fn outcomes_match_controller_sessions() {
        let plugin = plugin(&["crane", "slate", "irate", "trace", "apple", "paper"]);
        let result = run_simulation(&plugin, &SimulationConfig { clients: 25, seed: 11 }, None);

        assert_eq!(
            plugin.controller().state_counts(),
            (0, result.wins(), result.losses)
        );
    }

    #[test]
    fn every_write_gets_a_reply() {
        let plugin = plugin(&["crane", "slate", "irate"]);
        let result = run_simulation(&plugin, &SimulationConfig { clients: 10, seed: 1 }, None);

        assert_eq!(result.replies, result.writes);
        assert!(result.writes >= 10);
    }

    #[test]
    fn single_word_dictionary_always_wins_first_scored_guess() {
        let plugin = plugin(&["crane"]);
        let result = run_simulation(&plugin, &SimulationConfig { clients: 8, seed: 3 }, None);

        assert_eq!(result.wins_by_attempt[0], 8);
        assert_eq!(result.losses, 0);
    }

    #[test]
    fn zero_clients() {
        let plugin = plugin(&["crane"]);
        let result = run_simulation(&plugin, &SimulationConfig { clients: 0, seed: 0 }, None);

        assert_eq!(result.writes, 0);
        assert_eq!(result.wins(), 0);
    }
}
