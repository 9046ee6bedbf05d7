//! MQTT Wordle
//!
//! A daily word-guessing game played over a publish/subscribe topic. Clients
//! publish five-letter guesses to the game topic; each guess is scored against
//! the day's answer and the feedback is published back to that client alone.
//!
//! # Quick Start
//!
//! ```rust
//! use mqtt_wordle::broker::{Access, AclCheck, LocalBroker, Verdict, WordlePlugin};
//! use mqtt_wordle::game::{FixedClock, GameController};
//! use mqtt_wordle::wordlists::words_from_slice;
//! use std::sync::Arc;
//!
//! let dictionary = words_from_slice(&["crane", "slate"]).unwrap();
//! let controller = GameController::new(dictionary, FixedClock::at_day(0));
//! let plugin = WordlePlugin::new(Arc::new(controller), "wordle");
//! let broker = LocalBroker::new();
//!
//! let check = AclCheck {
//!     client_id: "alice",
//!     address: "192.0.2.1",
//!     topic: "wordle",
//!     access: Access::Write,
//!     payload: b"crane",
//! };
//! assert_eq!(plugin.acl_check(&check, &broker), Verdict::Deny);
//! assert!(broker.take_for("alice")[0].payload.contains("Well done!"));
//! ```

// Core domain types
pub mod core;

// Daily game state
pub mod game;

// Word lists
pub mod wordlists;

// Transport seam
pub mod broker;

// Command implementations
pub mod commands;

// Response rendering and terminal output
pub mod output;
