use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of access requested on an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Access {
    Read,
    Write,
    Delete,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Lifecycle state of a record.
///
/// The transition is one-way: a record starts `Constructing`, is populated
/// with its defaults, and becomes `Sealed` before it is handed out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordPhase {
    /// Fields are being populated; no guard applies.
    #[default]
    Constructing,
    /// The field set is fixed and every access is guarded.
    Sealed,
}

impl RecordPhase {
    /// Returns `true` once the record has been sealed.
    pub fn is_sealed(&self) -> bool {
        matches!(self, Self::Sealed)
    }
}
