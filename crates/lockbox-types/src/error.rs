use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type name used in attribute error messages.
///
/// The `#[error]` strings below spell it out literally; keep them in sync.
pub const TYPE_NAME: &str = "GuardedRecord";

/// Why an attribute access was refused.
///
/// Every variant carries the name of the offending attribute.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AttributeError {
    /// The name is neither a field nor a method.
    #[error("type 'GuardedRecord' has no attribute '{0}'")]
    UnknownAttribute(String),

    /// A write targeted a read-only field or a method.
    #[error("'{0}' is marked as read_only")]
    ReadOnlyViolation(String),

    /// A write targeted a name that is not part of the sealed field set.
    #[error("type 'GuardedRecord' cannot contain new attributes (tried to add '{0}')")]
    NoNewFieldsViolation(String),

    /// A delete was attempted on a sealed record.
    #[error("type 'GuardedRecord' cannot remove attributes (tried to remove '{0}')")]
    NoDeletionViolation(String),
}

/// Fieldless discriminant of [`AttributeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeErrorKind {
    UnknownAttribute,
    ReadOnlyViolation,
    NoNewFieldsViolation,
    NoDeletionViolation,
}

impl AttributeError {
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownAttribute(name.into())
    }

    pub fn read_only(name: impl Into<String>) -> Self {
        Self::ReadOnlyViolation(name.into())
    }

    pub fn no_new_fields(name: impl Into<String>) -> Self {
        Self::NoNewFieldsViolation(name.into())
    }

    pub fn no_deletion(name: impl Into<String>) -> Self {
        Self::NoDeletionViolation(name.into())
    }

    /// The attribute the refused access targeted.
    pub fn name(&self) -> &str {
        match self {
            Self::UnknownAttribute(n)
            | Self::ReadOnlyViolation(n)
            | Self::NoNewFieldsViolation(n)
            | Self::NoDeletionViolation(n) => n,
        }
    }

    pub fn kind(&self) -> AttributeErrorKind {
        match self {
            Self::UnknownAttribute(_) => AttributeErrorKind::UnknownAttribute,
            Self::ReadOnlyViolation(_) => AttributeErrorKind::ReadOnlyViolation,
            Self::NoNewFieldsViolation(_) => AttributeErrorKind::NoNewFieldsViolation,
            Self::NoDeletionViolation(_) => AttributeErrorKind::NoDeletionViolation,
        }
    }
}
