//! Document arena: slotmap-backed element tree with attributes, text
//! content, and event listeners.

pub mod events;
pub mod node;
pub mod tree;

pub use events::{Event, Handler};
pub use node::{ElementData, NodeId};
pub use tree::Document;
