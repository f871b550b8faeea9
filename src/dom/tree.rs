//! Tree operations: create, append, remove, inspect.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::events::{Event, Handler, ListenerTable};
use super::node::{ElementData, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The document: an element tree backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships and
/// event listeners are stored in secondary maps so that node removal is
/// O(subtree size) and lookup is O(1).
///
/// Newly created elements are detached; they join the tree when passed to
/// [`Document::append_child`]. The document never reads back what a
/// builder wrote, so construction helpers layered on top stay
/// fire-and-forget.
pub struct Document {
    nodes: SlotMap<NodeId, ElementData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    listeners: SecondaryMap<NodeId, ListenerTable>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            listeners: SecondaryMap::new(),
        }
    }

    /// Create a new, detached element of the given tag.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = self.nodes.insert(ElementData::new(tag));
        self.children.insert(id, Vec::new());
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// If `child` already has a parent it is detached first and keeps its
    /// subtree intact. Returns `false` (and does nothing) when either node
    /// does not exist — stale ids are skipped, not errors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return false;
        }

        // Detach from old parent.
        if let Some(old_parent) = self.parent.remove(child) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&sibling| sibling != child);
            }
        }

        self.parent.insert(child, parent);
        self.children
            .get_mut(parent)
            .expect("parent must have children vec")
            .push(child);
        true
    }

    /// Remove a node and all its descendants recursively, along with their
    /// listeners.
    ///
    /// Returns the `ElementData` for the removed node, or `None` if it
    /// didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<ElementData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        // Detach from parent's children list.
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        // Collect all descendants (BFS) to remove them.
        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                for &child in &kids {
                    to_remove.push_back(child);
                }
            }
            self.parent.remove(current);
            self.listeners.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed_root_data = data;
            }
        }

        removed_root_data
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has
    /// no children or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&ElementData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id)
    }

    /// Whether the document contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes in the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Attributes and text ──────────────────────────────────────────

    /// Set an attribute on a node. No-op if the node does not exist.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.set_attribute(name, value);
        }
    }

    /// Look up an attribute value on a node.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|data| data.attribute(name))
    }

    /// Set a node's text content, replacing any previous value. No-op if
    /// the node does not exist.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.set_text(text);
        }
    }

    /// A node's text content, if set.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).and_then(ElementData::text)
    }

    // ── Event listeners ──────────────────────────────────────────────

    /// Register an event listener on a node. The event type is lower-cased
    /// by the listener table. No-op if the node does not exist.
    pub fn add_event_listener(&mut self, id: NodeId, event_type: &str, handler: Handler) {
        if !self.nodes.contains_key(id) {
            return;
        }
        if let Some(table) = self.listeners.get_mut(id) {
            table.add(event_type, handler);
        } else {
            let mut table = ListenerTable::new();
            table.add(event_type, handler);
            self.listeners.insert(id, table);
        }
    }

    /// Number of listeners registered on a node for an event type.
    pub fn listener_count(&self, id: NodeId, event_type: &str) -> usize {
        self.listeners
            .get(id)
            .map(|table| table.matching(event_type).len())
            .unwrap_or(0)
    }

    /// Synchronously fire an event at a node.
    ///
    /// Invokes the node's matching listeners in registration order and
    /// returns how many ran. The event type is matched case-insensitively
    /// (lower-cased on both sides). There is no capture or bubble phase.
    pub fn dispatch(&self, id: NodeId, event_type: &str) -> usize {
        let Some(table) = self.listeners.get(id) else {
            return 0;
        };
        let handlers = table.matching(event_type);
        let event = Event::new(event_type.to_lowercase(), id);
        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (Document, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.create_element("body");
        let a = doc.create_element("section");
        let b = doc.create_element("aside");
        let c = doc.create_element("button");
        let d = doc.create_element("span");
        doc.append_child(root, a);
        doc.append_child(root, b);
        doc.append_child(a, c);
        doc.append_child(a, d);
        (doc, root, a, b, c, d)
    }

    #[test]
    fn create_element_is_detached() {
        let mut doc = Document::new();
        let id = doc.create_element("div");
        assert!(doc.contains(id));
        assert_eq!(doc.parent(id), None);
        assert!(doc.children(id).is_empty());
        assert_eq!(doc.get(id).unwrap().tag, "div");
    }

    #[test]
    fn append_child_parent_relationship() {
        let (doc, root, a, _b, c, _d) = build_tree();
        assert_eq!(doc.parent(a), Some(root));
        assert_eq!(doc.parent(c), Some(a));
        assert_eq!(doc.parent(root), None);
    }

    #[test]
    fn children_list_in_order() {
        let (doc, root, a, b, c, d) = build_tree();
        assert_eq!(doc.children(root), &[a, b]);
        assert_eq!(doc.children(a), &[c, d]);
        assert!(doc.children(c).is_empty());
    }

    #[test]
    fn append_child_reparents() {
        let (mut doc, _root, a, b, c, _d) = build_tree();
        assert!(doc.append_child(b, c));
        assert_eq!(doc.parent(c), Some(b));
        assert!(!doc.children(a).contains(&c));
        assert_eq!(doc.children(b), &[c]);
    }

    #[test]
    fn append_child_stale_ids() {
        let mut doc = Document::new();
        let parent = doc.create_element("div");
        let stale = doc.create_element("span");
        doc.remove(stale);
        assert!(!doc.append_child(parent, stale));
        assert!(doc.children(parent).is_empty());

        let orphan = doc.create_element("em");
        doc.remove(parent);
        assert!(!doc.append_child(parent, orphan));
        assert_eq!(doc.parent(orphan), None);
    }

    #[test]
    fn remove_leaf() {
        let (mut doc, _root, a, _b, c, d) = build_tree();
        let removed = doc.remove(c);
        assert_eq!(removed.unwrap().tag, "button");
        assert!(!doc.contains(c));
        assert_eq!(doc.children(a), &[d]);
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn remove_subtree() {
        let (mut doc, root, a, b, c, d) = build_tree();
        doc.remove(a);
        assert!(!doc.contains(a));
        assert!(!doc.contains(c));
        assert!(!doc.contains(d));
        assert!(doc.contains(root));
        assert!(doc.contains(b));
        assert_eq!(doc.children(root), &[b]);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn remove_nonexistent() {
        let mut doc = Document::new();
        let id = doc.create_element("div");
        doc.remove(id);
        assert!(doc.remove(id).is_none());
    }

    #[test]
    fn remove_drops_listeners() {
        let mut doc = Document::new();
        let id = doc.create_element("button");
        doc.add_event_listener(id, "click", Rc::new(|_| {}));
        assert_eq!(doc.listener_count(id, "click"), 1);
        doc.remove(id);
        assert_eq!(doc.listener_count(id, "click"), 0);
    }

    #[test]
    fn attributes_through_document() {
        let mut doc = Document::new();
        let id = doc.create_element("a");
        doc.set_attribute(id, "href", "/about");
        assert_eq!(doc.attribute(id, "href"), Some("/about"));
        assert_eq!(doc.attribute(id, "rel"), None);
    }

    #[test]
    fn set_attribute_on_missing_node_is_noop() {
        let mut doc = Document::new();
        let stale = doc.create_element("div");
        doc.remove(stale);
        doc.set_attribute(stale, "id", "x"); // should not panic
        assert_eq!(doc.attribute(stale, "id"), None);
    }

    #[test]
    fn text_through_document() {
        let mut doc = Document::new();
        let id = doc.create_element("p");
        assert_eq!(doc.text(id), None);
        doc.set_text(id, "hello");
        assert_eq!(doc.text(id), Some("hello"));
        doc.set_text(id, "replaced");
        assert_eq!(doc.text(id), Some("replaced"));
    }

    #[test]
    fn dispatch_invokes_listeners() {
        let mut doc = Document::new();
        let id = doc.create_element("button");
        let hits = Rc::new(Cell::new(0u32));
        let hits_in = Rc::clone(&hits);
        doc.add_event_listener(
            id,
            "click",
            Rc::new(move |event| {
                assert_eq!(event.event_type, "click");
                hits_in.set(hits_in.get() + 1);
            }),
        );

        assert_eq!(doc.dispatch(id, "click"), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dispatch_is_case_insensitive() {
        let mut doc = Document::new();
        let id = doc.create_element("button");
        doc.add_event_listener(id, "Click", Rc::new(|_| {}));
        assert_eq!(doc.dispatch(id, "CLICK"), 1);
        assert_eq!(doc.dispatch(id, "click"), 1);
        assert_eq!(doc.dispatch(id, "keydown"), 0);
    }

    #[test]
    fn dispatch_event_targets_node() {
        let mut doc = Document::new();
        let id = doc.create_element("button");
        let seen = Rc::new(Cell::new(None));
        let seen_in = Rc::clone(&seen);
        doc.add_event_listener(id, "click", Rc::new(move |event| {
            seen_in.set(Some(event.target));
        }));
        doc.dispatch(id, "click");
        assert_eq!(seen.get(), Some(id));
    }

    #[test]
    fn dispatch_on_node_without_listeners() {
        let mut doc = Document::new();
        let id = doc.create_element("div");
        assert_eq!(doc.dispatch(id, "click"), 0);
    }

    #[test]
    fn listener_on_missing_node_is_noop() {
        let mut doc = Document::new();
        let stale = doc.create_element("div");
        doc.remove(stale);
        doc.add_event_listener(stale, "click", Rc::new(|_| {}));
        assert_eq!(doc.listener_count(stale, "click"), 0);
    }

    #[test]
    fn len_and_is_empty() {
        let (doc, ..) = build_tree();
        assert_eq!(doc.len(), 5);
        assert!(!doc.is_empty());

        let empty = Document::new();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn default_impl() {
        let doc = Document::default();
        assert!(doc.is_empty());
    }
}
