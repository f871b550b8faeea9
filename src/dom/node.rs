//! Node types: NodeId, ElementData.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a document node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single element node.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name (e.g. "div", "button").
    pub tag: String,
    /// Attributes in application order. `set_attribute` replaces in place,
    /// so the order reflects first assignment.
    attributes: Vec<(String, String)>,
    /// Text content, if any.
    text: Option<String>,
}

impl ElementData {
    /// Create a new `ElementData` for the given tag, with no attributes
    /// and no text content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
        }
    }

    /// Set an attribute. Replaces the value in place if the name is already
    /// present, preserving its position in the attribute order.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether an attribute with the given name is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }

    /// All attributes in application order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Set the text content, replacing any previous value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// The text content, if set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Check whether the `class` attribute contains a given token.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|value| value.split_whitespace().any(|token| token == class))
            .unwrap_or(false)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
