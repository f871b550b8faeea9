//! Event types and per-node listener storage.
//!
//! The document owns all listeners for a node's lifetime; there is no
//! removal API. Event type names are lower-cased on registration and on
//! dispatch, so `"Click"`, `"CLICK"`, and `"click"` address the same
//! listeners. Callers that rely on other case behavior must normalize
//! before registering.

use std::rc::Rc;

use super::node::NodeId;

/// Callback invoked when an event fires on a node.
pub type Handler = Rc<dyn Fn(&Event)>;

/// A dispatched event: the (lower-cased) event type plus the target node.
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: String,
    pub target: NodeId,
}

impl Event {
    /// Create a new event for the given type and target.
    pub fn new(event_type: impl Into<String>, target: NodeId) -> Self {
        Self {
            event_type: event_type.into(),
            target,
        }
    }
}

// ---------------------------------------------------------------------------
// ListenerTable
// ---------------------------------------------------------------------------

/// Listeners registered on one node, in registration order.
#[derive(Default, Clone)]
pub struct ListenerTable {
    entries: Vec<(String, Handler)>,
}

impl ListenerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a listener. The event type is lower-cased before storage.
    pub fn add(&mut self, event_type: &str, handler: Handler) {
        self.entries.push((event_type.to_lowercase(), handler));
    }

    /// Listeners matching an event type, in registration order. The query
    /// is lower-cased before matching.
    pub fn matching(&self, event_type: &str) -> Vec<Handler> {
        let wanted = event_type.to_lowercase();
        self.entries
            .iter()
            .filter(|(name, _)| *name == wanted)
            .map(|(_, handler)| Rc::clone(handler))
            .collect()
    }

    /// Total number of registered listeners (all event types).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ListenerTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.entries.iter().map(|(n, _)| n.as_str()).collect();
        f.debug_struct("ListenerTable").field("events", &names).finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
