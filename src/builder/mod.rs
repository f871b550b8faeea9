//! Element construction: call-shape resolution, typed properties, and the
//! build pass that materializes one element against the document.

pub mod args;
pub mod build;
pub mod props;

pub use args::{resolve, Arg, CallShape, Scalar};
pub use build::build_element;
pub use props::{Props, EVENT_PREFIX};
