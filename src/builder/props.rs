//! Typed properties bag for element construction.
//!
//! [`Props`] replaces an open-ended attribute object with a small set of
//! well-known fields (class names, dataset entries, event bindings) plus an
//! ordered escape hatch for arbitrary name/value attributes.

use std::rc::Rc;

use crate::dom::{Event, Handler};

/// Reserved prefix marking an attribute key as an event binding.
pub const EVENT_PREFIX: &str = "on";

/// Properties applied to one element during construction.
///
/// Built with chained methods in the usual builder style:
///
/// ```
/// use domcraft::builder::Props;
///
/// let props = Props::new()
///     .class("card wide")
///     .data("id", "5")
///     .attr("role", "note")
///     .on("click", |_| {});
/// assert_eq!(props.merged_class().as_deref(), Some("card wide"));
/// ```
#[derive(Default)]
pub struct Props {
    /// The `className` value, if set.
    pub class_name: Option<String>,
    /// The `classes` alias, merged into the class attribute and never
    /// emitted itself.
    pub classes: Option<String>,
    /// Dataset entries, expanded to `data-<key>` attributes in order.
    pub data: Vec<(String, String)>,
    /// Event bindings. The event type string reaches the document verbatim;
    /// the document decides case handling.
    pub handlers: Vec<(String, Handler)>,
    /// Arbitrary attributes, applied first, in insertion order.
    pub attrs: Vec<(String, String)>,
}

impl Props {
    /// Create an empty properties bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class name (the `className` field). Replaces any previous
    /// value; use whitespace to separate multiple tokens.
    pub fn class(mut self, value: impl Into<String>) -> Self {
        self.class_name = Some(value.into());
        self
    }

    /// Set the `classes` alias. Its tokens are merged after the `class`
    /// tokens, duplicates removed.
    pub fn classes(mut self, value: impl Into<String>) -> Self {
        self.classes = Some(value.into());
        self
    }

    /// Add a dataset entry, emitted as a `data-<key>` attribute.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }

    /// Add an arbitrary attribute (the escape hatch).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Bind an event listener for the given event type.
    pub fn on(mut self, event_type: impl Into<String>, handler: impl Fn(&Event) + 'static) -> Self {
        self.handlers.push((event_type.into(), Rc::new(handler)));
        self
    }

    /// Bind an event listener from an `on`-prefixed attribute key, e.g.
    /// `"onclick"` or `"onClick"`.
    ///
    /// The prefix is stripped and the remainder passed through verbatim —
    /// no case normalization happens here; that is the document's call.
    /// A key without the prefix is used unchanged.
    pub fn handler_attr(self, key: &str, handler: impl Fn(&Event) + 'static) -> Self {
        let event_type = key.strip_prefix(EVENT_PREFIX).unwrap_or(key);
        self.on(event_type, handler)
    }

    /// The merged class attribute value.
    ///
    /// Splits `class_name` and `classes` on whitespace, unions the non-empty
    /// tokens (`class_name` tokens first, duplicates removed, first
    /// occurrence wins), and rejoins with single spaces. Returns `None` when
    /// neither field is set.
    pub fn merged_class(&self) -> Option<String> {
        if self.class_name.is_none() && self.classes.is_none() {
            return None;
        }
        let mut tokens: Vec<&str> = Vec::new();
        for source in [&self.class_name, &self.classes] {
            if let Some(value) = source {
                for token in value.split_whitespace() {
                    if !tokens.contains(&token) {
                        tokens.push(token);
                    }
                }
            }
        }
        Some(tokens.join(" "))
    }

    /// Whether the bag carries nothing at all.
    pub fn is_empty(&self) -> bool {
        self.class_name.is_none()
            && self.classes.is_none()
            && self.data.is_empty()
            && self.handlers.is_empty()
            && self.attrs.is_empty()
    }
}

impl std::fmt::Debug for Props {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let events: Vec<&str> = self.handlers.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("Props")
            .field("class_name", &self.class_name)
            .field("classes", &self.classes)
            .field("data", &self.data)
            .field("handlers", &events)
            .field("attrs", &self.attrs)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
