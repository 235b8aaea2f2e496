//! Mutation Bus - notifications for changes to the host tree
//!
//! Design: one enum for every kind of change, fanned out over a tokio
//! broadcast channel. Publishing never blocks and never fails.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::NodeId;

/// Tree mutations published by [`Document`](crate::document::Document)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationEvent {
    NodeInserted { node: NodeId, parent: NodeId },
    NodeRemoved { node: NodeId, parent: NodeId },
    AttributeChanged { node: NodeId, name: String },
    TextChanged { node: NodeId },
    ValueChanged { node: NodeId },
}

/// Simple event bus using tokio broadcast channel
#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<MutationEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Bus keeping at most `capacity` undelivered events per subscriber
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event
    pub fn publish(&self, event: MutationEvent) {
        let _ = self.tx.send(event); // Ignore error if no subscribers
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<MutationEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
