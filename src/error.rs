//! Error types for element construction.

/// Errors from element construction.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The two positional arguments matched none of the six recognized
    /// call shapes. Carries a preformatted "value (type)" description of
    /// each argument for diagnostics.
    #[error("invalid arguments for <{tag}>: first = {first}, second = {second}")]
    InvalidArguments {
        tag: String,
        first: String,
        second: String,
    },
    /// Registry lookup by tag name failed.
    #[error("unknown tag: {0}")]
    UnknownTag(String),
}

// ===========================================================================
// Tests
// ===========================================================================
