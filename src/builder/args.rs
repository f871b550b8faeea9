//! Call-shape resolution for the flexible construction entry point.
//!
//! A factory call takes at most two positional arguments of flexible type.
//! [`resolve`] decides, from the shapes of those arguments, which of the six
//! recognized call forms was used and returns it as an explicit
//! [`CallShape`] variant. Anything else is an
//! [`InvalidArguments`](crate::error::BuildError::InvalidArguments) error
//! naming the tag and the serialized form and runtime type of both
//! arguments.

use crate::dom::NodeId;
use crate::error::BuildError;

use super::props::Props;

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// A text-content scalar: a string or a number, coerced to text.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl Scalar {
    /// Runtime type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Number(_) => "number",
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

// ---------------------------------------------------------------------------
// Arg
// ---------------------------------------------------------------------------

/// One loose positional argument to the flexible entry point.
///
/// Absence is expressed as `Option::None` at the call site.
pub enum Arg {
    /// A string or number (text content).
    Scalar(Scalar),
    /// A list of previously constructed elements.
    Children(Vec<NodeId>),
    /// A properties bag.
    Props(Props),
}

impl Arg {
    /// Runtime type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Scalar(scalar) => scalar.type_name(),
            Self::Children(_) => "element list",
            Self::Props(_) => "props",
        }
    }

    /// Serialized form, for diagnostics.
    pub fn serialized(&self) -> String {
        match self {
            Self::Scalar(Scalar::Text(text)) => format!("{text:?}"),
            Self::Scalar(Scalar::Number(number)) => number.to_string(),
            Self::Children(children) => format!("[{} elements]", children.len()),
            Self::Props(props) => format!("{props:?}"),
        }
    }
}

impl std::fmt::Debug for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.serialized(), self.type_name())
    }
}

impl From<Scalar> for Arg {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<Vec<NodeId>> for Arg {
    fn from(value: Vec<NodeId>) -> Self {
        Self::Children(value)
    }
}

impl From<&[NodeId]> for Arg {
    fn from(value: &[NodeId]) -> Self {
        Self::Children(value.to_vec())
    }
}

impl From<Props> for Arg {
    fn from(value: Props) -> Self {
        Self::Props(value)
    }
}

// ---------------------------------------------------------------------------
// CallShape
// ---------------------------------------------------------------------------

/// The six recognized call forms, as an explicit discriminated union.
#[derive(Debug)]
pub enum CallShape {
    /// `tag()` — empty element.
    Empty,
    /// `tag(text)` — element with text content.
    Text(Scalar),
    /// `tag(children)` — element with child elements.
    Children(Vec<NodeId>),
    /// `tag(props)` — element with attributes/handlers only.
    Props(Props),
    /// `tag(props, text)` — attributes plus text.
    PropsAndText(Props, Scalar),
    /// `tag(props, children)` — attributes plus children.
    PropsAndChildren(Props, Vec<NodeId>),
}

/// Resolve two loose positional arguments into a [`CallShape`].
///
/// The patterns are tried in strict precedence order, first match wins:
///
/// 1. both absent → [`CallShape::Empty`]
/// 2. element list, absent → [`CallShape::Children`]
/// 3. string/number, absent → [`CallShape::Text`]
/// 4. props, absent → [`CallShape::Props`]
/// 5. props, element list → [`CallShape::PropsAndChildren`]
/// 6. props, string/number → [`CallShape::PropsAndText`]
///
/// Any other combination fails with `InvalidArguments` naming `tag` and
/// both arguments.
pub fn resolve(
    tag: &str,
    first: Option<Arg>,
    second: Option<Arg>,
) -> Result<CallShape, BuildError> {
    match (first, second) {
        (None, None) => Ok(CallShape::Empty),
        (Some(Arg::Children(children)), None) => Ok(CallShape::Children(children)),
        (Some(Arg::Scalar(scalar)), None) => Ok(CallShape::Text(scalar)),
        (Some(Arg::Props(props)), None) => Ok(CallShape::Props(props)),
        (Some(Arg::Props(props)), Some(Arg::Children(children))) => {
            Ok(CallShape::PropsAndChildren(props, children))
        }
        (Some(Arg::Props(props)), Some(Arg::Scalar(scalar))) => {
            Ok(CallShape::PropsAndText(props, scalar))
        }
        (first, second) => Err(BuildError::InvalidArguments {
            tag: tag.to_owned(),
            first: describe(&first),
            second: describe(&second),
        }),
    }
}

/// Diagnostic description of an optional argument: "serialized (type)".
fn describe(arg: &Option<Arg>) -> String {
    match arg {
        Some(arg) => format!("{arg:?}"),
        None => "none (absent)".to_owned(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
