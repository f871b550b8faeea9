//! Test helpers: deterministic serialization of built subtrees.
//!
//! [`to_html`] renders a node and its descendants as an HTML-like string
//! with attributes in application order, suitable for assertions and
//! snapshot testing. It is a diagnostic format, not a conforming HTML
//! serializer (no void-element or escaping edge cases beyond the basics).

use crate::dom::{Document, NodeId};

/// Serialize a subtree to an HTML-like string.
///
/// Attributes appear in application order. An element with neither text nor
/// children is rendered self-closing. Returns an empty string if the node
/// does not exist.
///
/// # Examples
///
/// ```
/// use domcraft::dom::Document;
/// use domcraft::registry::tags;
/// use domcraft::testing::to_html;
///
/// let mut doc = Document::new();
/// let item = tags::li().with_text(&mut doc, "one");
/// let list = tags::ul().with_children(&mut doc, &[item]);
/// assert_eq!(to_html(&doc, list), "<ul><li>one</li></ul>");
/// ```
pub fn to_html(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, node, &mut out);
    out
}

fn write_node(doc: &Document, node: NodeId, out: &mut String) {
    let Some(data) = doc.get(node) else {
        return;
    };

    out.push('<');
    out.push_str(&data.tag);
    for (name, value) in data.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }

    let children = doc.children(node);
    if data.text().is_none() && children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(text) = data.text() {
        out.push_str(&escape_text(text));
    }
    for &child in children {
        write_node(doc, child, out);
    }
    out.push_str("</");
    out.push_str(&data.tag);
    out.push('>');
}

fn escape_text(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

// ===========================================================================
// Tests
// ===========================================================================
