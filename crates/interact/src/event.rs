//! Activation events - programmatic clicks and submits
//!
//! Mirrors the two DOM events the helpers care about. Only cancelable events
//! honour `prevent_default`.

use serde::{Deserialize, Serialize};

use dom::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Click,
    Submit,
}

/// An event travelling from its target up to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: NodeId,
    cancelable: bool,
    default_prevented: bool,
}

impl Event {
    pub fn new(kind: EventKind, target: NodeId, cancelable: bool) -> Self {
        Self {
            kind,
            target,
            cancelable,
            default_prevented: false,
        }
    }

    /// Cancelable click, as `HTMLElement.click()` fires it
    pub fn click(target: NodeId) -> Self {
        Self::new(EventKind::Click, target, true)
    }

    /// `new Event('submit', { cancelable: true })`
    pub fn submit(target: NodeId) -> Self {
        Self::new(EventKind::Submit, target, true)
    }

    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
