use chrono::TimeDelta;
use mqtt_wordle::broker::{Access, AclCheck, LocalBroker, Verdict, WordlePlugin};
use mqtt_wordle::game::epoch::SECONDS_PER_DAY;
use mqtt_wordle::game::{FixedClock, GameController, MAX_ATTEMPTS, SessionState};
use mqtt_wordle::wordlists::words_from_slice;
use std::sync::Arc;
use std::thread;

// Day 0 answer: crane, day 1 answer: apple
const WORDS: &[&str] = &[
    "crane", "apple", "trace", "paper", "slate", "irate", "fghij", "rinse",
];

fn setup() -> (WordlePlugin, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::at_day(0));
    let controller = GameController::new(words_from_slice(WORDS).unwrap(), Arc::clone(&clock));
    (WordlePlugin::new(Arc::new(controller), "wordle"), clock)
}

fn write(plugin: &WordlePlugin, broker: &LocalBroker, who: &str, guess: &str) -> String {
    let check = AclCheck {
        client_id: who,
        address: who,
        topic: "wordle",
        access: Access::Write,
        payload: guess.as_bytes(),
    };
    assert_eq!(plugin.acl_check(&check, broker), Verdict::Deny);
    let mut replies = broker.take_for(who);
    assert_eq!(replies.len(), 1, "exactly one reply per write");
    replies.remove(0).payload
}

#[test]
fn win_on_third_guess_produces_share_block() {
    let (plugin, _) = setup();
    let broker = LocalBroker::new();

    write(&plugin, &broker, "alice", "slate");
    write(&plugin, &broker, "alice", "trace");
    let reply = write(&plugin, &broker, "alice", "CRANE");

    assert!(reply.starts_with("3/6: \x1b[32;1mc\x1b[0m"));
    assert!(reply.ends_with(
        "\n\nWell done!\n\nMQTT Wordle 0 3/6\n⬜⬜🟩⬜🟩\n⬜🟩🟩🟨🟩\n🟩🟩🟩🟩🟩\n"
    ));
}

#[test]
fn sixth_miss_shows_oh_dear_and_six_rows() {
    let (plugin, _) = setup();
    let broker = LocalBroker::new();

    for guess in ["slate", "irate", "fghij", "paper", "apple"] {
        let reply = write(&plugin, &broker, "bob", guess);
        assert!(!reply.contains("Oh dear!"));
    }
    let reply = write(&plugin, &broker, "bob", "rinse");

    assert!(reply.starts_with("6/6: "));
    let (_, block) = reply.split_once("\n\nOh dear!\n\n").unwrap();
    let mut lines = block.lines();
    assert_eq!(lines.next(), Some("MQTT Wordle 0 x/6"));
    assert_eq!(lines.count(), MAX_ATTEMPTS);

    let blocked = write(&plugin, &broker, "bob", "crane");
    assert_eq!(blocked, "Wait until tomorrow for the next word!");
    let session = plugin.controller().session_snapshot("bob").unwrap();
    assert_eq!(session.attempt_count(), MAX_ATTEMPTS);
    assert_eq!(session.state(), SessionState::Lost);
}

#[test]
fn rollover_gives_winner_a_fresh_game() {
    let (plugin, clock) = setup();
    let broker = LocalBroker::new();

    write(&plugin, &broker, "carol", "crane");
    assert_eq!(
        write(&plugin, &broker, "carol", "crane"),
        "Wait until tomorrow for the next word!"
    );

    clock.advance(TimeDelta::seconds(SECONDS_PER_DAY - 1));
    assert_eq!(
        write(&plugin, &broker, "carol", "crane"),
        "Wait until tomorrow for the next word!"
    );

    clock.advance(TimeDelta::seconds(1));
    let reply = write(&plugin, &broker, "carol", "apple");
    assert!(reply.contains("MQTT Wordle 1 1/6"));
}

#[test]
fn subscribe_triggers_rollover() {
    let (plugin, clock) = setup();
    let broker = LocalBroker::new();
    write(&plugin, &broker, "dave", "trace");

    clock.advance(TimeDelta::days(1));
    let check = AclCheck {
        client_id: "erin",
        address: "erin",
        topic: "wordle",
        access: Access::Subscribe,
        payload: &[],
    };

    assert_eq!(plugin.acl_check(&check, &broker), Verdict::Allow);
    assert_eq!(plugin.controller().session_count(), 0);
    assert_eq!(plugin.controller().day_index(), 1);
}

#[test]
fn concurrent_guesses_from_one_identity_count_once_each() {
    let (plugin, _) = setup();
    let plugin = Arc::new(plugin);
    let broker = Arc::new(LocalBroker::new());

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let plugin = Arc::clone(&plugin);
            let broker = Arc::clone(&broker);
            thread::spawn(move || {
                let check = AclCheck {
                    client_id: "shared",
                    address: "shared",
                    topic: "wordle",
                    access: Access::Write,
                    payload: b"slate",
                };
                plugin.acl_check(&check, broker.as_ref())
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Verdict::Deny);
    }

    let session = plugin.controller().session_snapshot("shared").unwrap();
    assert_eq!(session.attempt_count(), MAX_ATTEMPTS);

    let replies = broker.take_for("shared");
    assert_eq!(replies.len(), 10);
    let scored = replies.iter().filter(|d| d.payload.contains("/6: ")).count();
    let blocked = replies
        .iter()
        .filter(|d| d.payload == "Wait until tomorrow for the next word!")
        .count();
    assert_eq!(scored, MAX_ATTEMPTS);
    assert_eq!(blocked, 10 - MAX_ATTEMPTS);
}
