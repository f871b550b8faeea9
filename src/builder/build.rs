//! Element materialization: one synchronous pass against the document.

use crate::dom::{Document, NodeId};

use super::args::{CallShape, Scalar};
use super::props::Props;

/// Build one element of `tag` in `doc` according to a resolved call shape.
///
/// Creates a fresh node, applies properties, then children, and returns the
/// node. The library keeps no reference to it afterwards; the caller owns
/// insertion and removal via the document.
pub fn build_element(doc: &mut Document, tag: &str, shape: CallShape) -> NodeId {
    let node = doc.create_element(tag);
    match shape {
        CallShape::Empty => {}
        CallShape::Text(text) => set_text(doc, node, &text),
        CallShape::Children(children) => append_children(doc, node, &children),
        CallShape::Props(props) => apply_props(doc, node, props),
        CallShape::PropsAndText(props, text) => {
            apply_props(doc, node, props);
            set_text(doc, node, &text);
        }
        CallShape::PropsAndChildren(props, children) => {
            apply_props(doc, node, props);
            append_children(doc, node, &children);
        }
    }
    node
}

/// Apply a properties bag to a node.
///
/// Application order is fixed: escape-hatch attributes first, then the
/// merged class value, then dataset entries, then event bindings. All
/// attribute application happens before children are attached.
fn apply_props(doc: &mut Document, node: NodeId, props: Props) {
    let class = props.merged_class();

    for (name, value) in props.attrs {
        doc.set_attribute(node, name, value);
    }
    if let Some(class) = class {
        doc.set_attribute(node, "class", class);
    }
    for (key, value) in props.data {
        doc.set_attribute(node, format!("data-{key}"), value);
    }
    for (event_type, handler) in props.handlers {
        // Passed verbatim; the document lower-cases event type names.
        doc.add_event_listener(node, &event_type, handler);
    }
}

/// Set a node's text content from a scalar, replacing any previous value.
fn set_text(doc: &mut Document, node: NodeId, text: &Scalar) {
    doc.set_text(node, text.to_string());
}

/// Append children in list order. Entries that are not live elements in the
/// document are skipped without error.
fn append_children(doc: &mut Document, node: NodeId, children: &[NodeId]) {
    for &child in children {
        doc.append_child(node, child);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
