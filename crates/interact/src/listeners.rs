//! Listener registry - which handlers run for which (node, event kind)
//!
//! One copy per equal handler; re-registering moves it to the back so the
//! latest registration runs last. Handlers stay until their node is forgotten.

use ahash::AHashMap;
use smallvec::SmallVec;

use dom::NodeId;

use crate::event::EventKind;
use crate::handlers::Handler;

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: AHashMap<(NodeId, EventKind), SmallVec<[Handler; 2]>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler at the back. An equal handler already present is moved
    /// there instead; returns false in that case.
    pub fn register(&mut self, node: NodeId, kind: EventKind, handler: Handler) -> bool {
        let slot = self.listeners.entry((node, kind)).or_default();
        let existing = slot.iter().position(|h| *h == handler);
        if let Some(idx) = existing {
            slot.remove(idx);
        }
        slot.push(handler);
        existing.is_none()
    }

    /// Drop every handler registered on `nodes`. Returns how many were dropped.
    pub fn forget(&mut self, nodes: &[NodeId]) -> usize {
        let mut dropped = 0;
        self.listeners.retain(|(node, _), slot| {
            if nodes.contains(node) {
                dropped += slot.len();
                false
            } else {
                true
            }
        });
        dropped
    }

    /// Snapshot of handlers in registration order
    pub fn handlers(&self, node: NodeId, kind: EventKind) -> Vec<Handler> {
        self.listeners
            .get(&(node, kind))
            .map(|slot| slot.to_vec())
            .unwrap_or_default()
    }

    pub fn count(&self, node: NodeId, kind: EventKind) -> usize {
        self.listeners.get(&(node, kind)).map_or(0, |slot| slot.len())
    }

    /// Total number of registered handlers
    pub fn len(&self) -> usize {
        self.listeners.values().map(|slot| slot.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
