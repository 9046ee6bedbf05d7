//! Publish/subscribe seam
//!
//! A guess reaches the game as an access-control check on the game topic. The
//! plugin scores it, publishes the reply straight back to the sender, and always
//! denies the write so the raw guess never appears on the topic.

mod local;

pub use local::{Delivery, LocalBroker};

use crate::game::GameController;
use std::sync::Arc;
use tracing::debug;

/// Default topic for guesses and replies
pub const DEFAULT_TOPIC: &str = "wordle";

/// Kind of access a client is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Subscribe,
    Unsubscribe,
    Read,
    Write,
}

/// One access-control check raised by the transport
#[derive(Debug, Clone, Copy)]
pub struct AclCheck<'a> {
    /// Client id, used to address the reply
    pub client_id: &'a str,
    /// Network address, used as the player identity
    pub address: &'a str,
    pub topic: &'a str,
    pub access: Access,
    pub payload: &'a [u8],
}

/// Answer to an access-control check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Allow,
    Deny,
    /// No opinion; the transport decides
    Ignore,
}

/// Delivers a message to a single client
pub trait Publisher: Send + Sync {
    fn publish(&self, client_id: &str, topic: &str, payload: &str);
}

/// Connects the game controller to a transport's access-control hook
pub struct WordlePlugin {
    controller: Arc<GameController>,
    topic: String,
}

impl WordlePlugin {
    #[must_use]
    pub fn new(controller: Arc<GameController>, topic: impl Into<String>) -> Self {
        Self {
            controller,
            topic: topic.into(),
        }
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn controller(&self) -> &Arc<GameController> {
        &self.controller
    }

    /// Handle one access-control check
    ///
    /// Checks on other topics are ignored. Every check on the game topic first
    /// rolls the day over if needed. Writes are scored, answered through
    /// `publisher`, and denied.
    pub fn acl_check(&self, check: &AclCheck<'_>, publisher: &dyn Publisher) -> Verdict {
        if check.topic != self.topic {
            return Verdict::Ignore;
        }

        self.controller.refresh_day();

        match check.access {
            Access::Subscribe | Access::Unsubscribe | Access::Read => Verdict::Allow,
            Access::Write => {
                let outcome = self.controller.submit_guess(check.address, check.payload);
                debug!(
                    client_id = check.client_id,
                    address = check.address,
                    kind = ?outcome.kind,
                    "replying to guess"
                );
                publisher.publish(check.client_id, &self.topic, &outcome.text);
                Verdict::Deny
            }
        }
    }
}
