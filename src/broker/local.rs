//! In-process publisher that keeps every delivery in memory

use super::Publisher;
use std::sync::{Mutex, PoisonError};

/// A message handed to one client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub client_id: String,
    pub topic: String,
    pub payload: String,
}

/// Records deliveries instead of sending them over a network
#[derive(Debug, Default)]
pub struct LocalBroker {
    deliveries: Mutex<Vec<Delivery>>,
}

impl LocalBroker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every delivery not yet taken
    #[must_use]
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return the deliveries for one client, oldest first
    pub fn take_for(&self, client_id: &str) -> Vec<Delivery> {
        let mut deliveries = self.deliveries.lock().unwrap_or_else(PoisonError::into_inner);
        let (taken, kept): (Vec<_>, Vec<_>) = deliveries
            .drain(..)
            .partition(|d| d.client_id == client_id);
        *deliveries = kept;
        taken
    }
}

impl Publisher for LocalBroker {
    fn publish(&self, client_id: &str, topic: &str, payload: &str) {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Delivery {
                client_id: client_id.to_owned(),
                topic: topic.to_owned(),
                payload: payload.to_owned(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_for_only_removes_that_client() {
        let broker = LocalBroker::new();
        broker.publish("a", "wordle", "one");
        broker.publish("b", "wordle", "two");
        broker.publish("a", "wordle", "three");

        let taken: Vec<String> = broker.take_for("a").into_iter().map(|d| d.payload).collect();

        assert_eq!(taken, ["one", "three"]);
        assert_eq!(broker.deliveries().len(), 1);
        assert_eq!(broker.deliveries()[0].client_id, "b");
    }
}
