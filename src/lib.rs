//! # domcraft
//!
//! Build DOM element trees with plain function calls instead of markup
//! templates. Each supported HTML tag maps to a factory that takes an
//! optional properties bag and optional children (text or a list of
//! elements) and returns a live node in the document tree.
//!
//! The loose two-argument call surface of hyperscript-style helpers is kept
//! as a thin adapter ([`factory::ElementFactory::call`]); the primary API is
//! one named constructor per call shape, with the shapes themselves expressed
//! as a discriminated union ([`builder::CallShape`]).
//!
//! ## Core Systems
//!
//! - **[`dom`]** — Slotmap-backed document arena: elements, attributes, text,
//!   event listeners, synchronous dispatch
//! - **[`builder`]** — Call-shape resolution, the typed [`builder::Props`]
//!   bag, and the build pass that materializes one element
//! - **[`factory`]** — Per-tag factories: named constructors plus the
//!   flexible positional entry point
//! - **[`registry`]** — The fixed set of known tags, as free functions
//!   (`tags::div()`) and a by-name [`registry::Registry`]
//! - **[`error`]** — [`error::BuildError`]
//! - **[`testing`]** — Deterministic subtree serialization for assertions
//!
//! ## Example
//!
//! ```
//! use domcraft::builder::Props;
//! use domcraft::dom::Document;
//! use domcraft::registry::tags;
//!
//! let mut doc = Document::new();
//! let first = tags::li().with_text(&mut doc, "first");
//! let second = tags::li().with_text(&mut doc, "second");
//! let list = tags::ul().with_props_and_children(
//!     &mut doc,
//!     Props::new().class("menu"),
//!     &[first, second],
//! );
//!
//! assert_eq!(doc.children(list), &[first, second]);
//! assert_eq!(doc.attribute(list, "class"), Some("menu"));
//! ```

pub mod builder;
pub mod dom;
pub mod error;
pub mod factory;
pub mod registry;
pub mod testing;
