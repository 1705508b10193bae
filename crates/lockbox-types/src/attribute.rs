use std::fmt;

use serde::{Deserialize, Serialize};

/// Value held by a field slot.
pub type FieldValue = i64;

/// A method exposed by every record.
///
/// Methods are attributes too: they can be read (yielding a handle) but never
/// written. The list is fixed at definition time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Returns `x + y`.
    Add,
    /// Displays the current value of `x`.
    LookAtX,
    /// Displays the current value of `y`.
    LookAtY,
}

impl Method {
    /// Every method, in declaration order.
    pub const ALL: [Method; 3] = [Method::Add, Method::LookAtX, Method::LookAtY];

    /// The attribute name this method is reachable under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::LookAtX => "look_at_x",
            Self::LookAtY => "look_at_y",
        }
    }

    /// Resolve an attribute name to a method, if it names one.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of reading an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    /// A stored field value.
    Field(FieldValue),
    /// A callable method handle.
    Method(Method),
}

impl Attribute {
    /// The field value, if this attribute is a field.
    pub fn as_field(&self) -> Option<FieldValue> {
        match self {
            Self::Field(v) => Some(*v),
            Self::Method(_) => None,
        }
    }

    /// The method handle, if this attribute is a method.
    pub fn as_method(&self) -> Option<Method> {
        match self {
            Self::Method(m) => Some(*m),
            Self::Field(_) => None,
        }
    }

    /// Returns `true` for method handles.
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Method(_))
    }
}
