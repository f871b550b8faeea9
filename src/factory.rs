//! Per-tag element factories.
//!
//! An [`ElementFactory`] wraps one tag name and exposes one named
//! constructor per recognized call shape, plus [`ElementFactory::call`], a
//! flexible adapter that resolves two loose positional arguments at runtime
//! for ergonomic parity with hyperscript-style helpers.

use crate::builder::{build_element, resolve, Arg, CallShape, Props, Scalar};
use crate::dom::{Document, NodeId};
use crate::error::BuildError;

/// A factory for elements of one tag.
///
/// The named constructors are infallible: with the call shape expressed in
/// the type system there is nothing left to reject. Only [`call`], which
/// re-creates the loose two-argument surface, can fail.
///
/// [`call`]: ElementFactory::call
///
/// # Examples
///
/// ```
/// use domcraft::dom::Document;
/// use domcraft::factory::ElementFactory;
///
/// let mut doc = Document::new();
/// let li = ElementFactory::new("li");
/// let item = li.with_text(&mut doc, "first");
/// assert_eq!(doc.text(item), Some("first"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementFactory {
    tag: &'static str,
}

impl ElementFactory {
    /// Create a factory for the given tag name.
    pub const fn new(tag: &'static str) -> Self {
        Self { tag }
    }

    /// The tag this factory builds.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    // ── Named constructors, one per call shape ───────────────────────

    /// `tag()` — build an empty element.
    pub fn build(&self, doc: &mut Document) -> NodeId {
        build_element(doc, self.tag, CallShape::Empty)
    }

    /// `tag(text)` — build an element with text content.
    pub fn with_text(&self, doc: &mut Document, text: impl Into<Scalar>) -> NodeId {
        build_element(doc, self.tag, CallShape::Text(text.into()))
    }

    /// `tag(children)` — build an element with child elements.
    pub fn with_children(&self, doc: &mut Document, children: &[NodeId]) -> NodeId {
        build_element(doc, self.tag, CallShape::Children(children.to_vec()))
    }

    /// `tag(props)` — build an element with attributes/handlers only.
    pub fn with_props(&self, doc: &mut Document, props: Props) -> NodeId {
        build_element(doc, self.tag, CallShape::Props(props))
    }

    /// `tag(props, text)` — attributes plus text.
    pub fn with_props_and_text(
        &self,
        doc: &mut Document,
        props: Props,
        text: impl Into<Scalar>,
    ) -> NodeId {
        build_element(doc, self.tag, CallShape::PropsAndText(props, text.into()))
    }

    /// `tag(props, children)` — attributes plus children.
    pub fn with_props_and_children(
        &self,
        doc: &mut Document,
        props: Props,
        children: &[NodeId],
    ) -> NodeId {
        build_element(
            doc,
            self.tag,
            CallShape::PropsAndChildren(props, children.to_vec()),
        )
    }

    // ── Flexible adapter ─────────────────────────────────────────────

    /// Build from two loose positional arguments.
    ///
    /// Resolves the argument shapes into one of the six call forms (see
    /// [`resolve`]) and builds accordingly. On a shape mismatch this logs
    /// one diagnostic line naming the tag, then returns the error
    /// unchanged; no node is created.
    pub fn call(
        &self,
        doc: &mut Document,
        first: Option<Arg>,
        second: Option<Arg>,
    ) -> Result<NodeId, BuildError> {
        let shape = resolve(self.tag, first, second).map_err(|err| {
            log::error!("element construction failed for <{}>: {err}", self.tag);
            err
        })?;
        Ok(build_element(doc, self.tag, shape))
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

    const DIV: ElementFactory = ElementFactory::new("div");
    const UL: ElementFactory = ElementFactory::new("ul");

    #[test]
    fn tag_accessor() {
        assert_eq!(DIV.tag(), "div");
    }

    #[test]
    fn build_empty() {
        let mut doc = Document::new();
        let node = DIV.build(&mut doc);
        let data = doc.get(node).unwrap();
        assert_eq!(data.tag, "div");
        assert!(data.attributes().is_empty());
        assert!(data.text().is_none());
        assert!(doc.children(node).is_empty());
    }

    #[test]
    fn with_text_string_and_number() {
        let mut doc = Document::new();
        let p = ElementFactory::new("p").with_text(&mut doc, "hi");
        assert_eq!(doc.text(p), Some("hi"));
        let td = ElementFactory::new("td").with_text(&mut doc, 7i64);
        assert_eq!(doc.text(td), Some("7"));
    }

    #[test]
    fn with_children_in_order() {
        let mut doc = Document::new();
        let li = ElementFactory::new("li");
        let first = li.with_text(&mut doc, "a");
        let second = li.with_text(&mut doc, "b");
        let list = UL.with_children(&mut doc, &[first, second]);
        assert_eq!(doc.children(list), &[first, second]);
    }

    #[test]
    fn with_props_applies_attributes() {
        let mut doc = Document::new();
        let node = DIV.with_props(&mut doc, Props::new().attr("id", "main").class("card"));
        assert_eq!(doc.attribute(node, "id"), Some("main"));
        assert_eq!(doc.attribute(node, "class"), Some("card"));
    }

    #[test]
    fn with_props_and_text() {
        let mut doc = Document::new();
        let node = DIV.with_props_and_text(&mut doc, Props::new().class("note"), "hello");
        assert_eq!(doc.attribute(node, "class"), Some("note"));
        assert_eq!(doc.text(node), Some("hello"));
    }

    #[test]
    fn with_props_and_children() {
        let mut doc = Document::new();
        let child = DIV.build(&mut doc);
        let node = DIV.with_props_and_children(&mut doc, Props::new().class("box"), &[child]);
        assert_eq!(doc.attribute(node, "class"), Some("box"));
        assert_eq!(doc.children(node), &[child]);
    }

    // ── Flexible adapter ─────────────────────────────────────────────

    #[test]
    fn call_empty() {
        let mut doc = Document::new();
        let node = DIV.call(&mut doc, None, None).unwrap();
        assert_eq!(doc.get(node).unwrap().tag, "div");
    }

    #[test]
    fn call_text() {
        let mut doc = Document::new();
        let node = DIV.call(&mut doc, Some("hi".into()), None).unwrap();
        assert_eq!(doc.text(node), Some("hi"));
    }

    #[test]
    fn call_children() {
        let mut doc = Document::new();
        let child = DIV.build(&mut doc);
        let node = UL.call(&mut doc, Some(vec![child].into()), None).unwrap();
        assert_eq!(doc.children(node), &[child]);
    }

    #[test]
    fn call_props() {
        let mut doc = Document::new();
        let node = DIV
            .call(&mut doc, Some(Props::new().class("a").into()), None)
            .unwrap();
        assert_eq!(doc.attribute(node, "class"), Some("a"));
    }

    #[test]
    fn call_props_and_text() {
        let mut doc = Document::new();
        let node = DIV
            .call(
                &mut doc,
                Some(Props::new().class("a").into()),
                Some("body".into()),
            )
            .unwrap();
        assert_eq!(doc.attribute(node, "class"), Some("a"));
        assert_eq!(doc.text(node), Some("body"));
    }

    #[test]
    fn call_props_and_children() {
        let mut doc = Document::new();
        let child = DIV.build(&mut doc);
        let node = UL
            .call(
                &mut doc,
                Some(Props::new().into()),
                Some(vec![child].into()),
            )
            .unwrap();
        assert_eq!(doc.children(node), &[child]);
    }

    #[test]
    fn call_invalid_creates_no_node() {
        let mut doc = Document::new();
        let before = doc.len();
        let err = DIV
            .call(&mut doc, Some(42i64.into()), Some("ignored".into()))
            .unwrap_err();
        assert_eq!(doc.len(), before);
        let msg = err.to_string();
        assert!(msg.contains("<div>"));
        assert!(msg.contains("42 (number)"));
        assert!(msg.contains("\"ignored\" (string)"));
    }

    #[test]
    fn call_with_handler_props() {
        let mut doc = Document::new();
        let clicked = Rc::new(Cell::new(false));
        let clicked_in = Rc::clone(&clicked);
        let props = Props::new().handler_attr("onclick", move |_| clicked_in.set(true));
        let node = DIV
            .call(&mut doc, Some(props.into()), Some("hi".into()))
            .unwrap();
        assert_eq!(doc.text(node), Some("hi"));
        assert_eq!(doc.dispatch(node, "click"), 1);
        assert!(clicked.get());
    }

    #[test]
    fn repeated_calls_build_independent_nodes() {
        let mut doc = Document::new();
        let make = |doc: &mut Document| {
            DIV.call(doc, Some(Props::new().class("a").into()), Some("x".into()))
                .unwrap()
        };
        let first = make(&mut doc);
        let second = make(&mut doc);
        assert_ne!(first, second);
        assert_eq!(doc.attribute(first, "class"), doc.attribute(second, "class"));
        assert_eq!(doc.text(first), doc.text(second));
    }
}
