use std::collections::{BTreeMap, BTreeSet};

use lockbox_types::{Access, AttributeError, FieldValue, RecordPhase};

// ---------------------------------------------------------------------------
// AccessRequest
// ---------------------------------------------------------------------------

/// A single attribute access to be decided by the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessRequest<'a> {
    pub access: Access,
    pub name: &'a str,
}

impl<'a> AccessRequest<'a> {
    pub fn read(name: &'a str) -> Self {
        Self {
            access: Access::Read,
            name,
        }
    }

    pub fn write(name: &'a str) -> Self {
        Self {
            access: Access::Write,
            name,
        }
    }

    pub fn delete(name: &'a str) -> Self {
        Self {
            access: Access::Delete,
            name,
        }
    }
}

// ---------------------------------------------------------------------------
// GuardContext
// ---------------------------------------------------------------------------

/// Record state visible to every rule.
///
/// The context borrows the record's bookkeeping directly, so rules never go
/// back through the guarded API to inspect it.
#[derive(Clone, Copy, Debug)]
pub struct GuardContext<'a> {
    pub phase: RecordPhase,
    pub read_only: &'a BTreeSet<String>,
    pub fields: &'a BTreeMap<String, FieldValue>,
}

impl<'a> GuardContext<'a> {
    pub fn new(
        phase: RecordPhase,
        read_only: &'a BTreeSet<String>,
        fields: &'a BTreeMap<String, FieldValue>,
    ) -> Self {
        Self {
            phase,
            read_only,
            fields,
        }
    }

    /// Returns `true` if `name` is an existing field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns `true` if `name` is in the explicit read-only set.
    pub fn is_read_only(&self, name: &str) -> bool {
        self.read_only.contains(name)
    }
}

// ---------------------------------------------------------------------------
// RuleDecision / RuleResult
// ---------------------------------------------------------------------------

/// The outcome of a single rule evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleDecision {
    /// The rule has no objection; continue with the next rule.
    Allow,
    /// The access is refused.
    Deny(AttributeError),
}

impl RuleDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Recorded result of a rule that ran during an evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleResult {
    pub rule_name: String,
    pub passed: bool,
}

// ---------------------------------------------------------------------------
// GuardRule trait
// ---------------------------------------------------------------------------

/// A single policy check in the guard pipeline.
///
/// Rules are evaluated in order and only against sealed records. The trait is
/// object-safe and `Send + Sync` so rules can be stored in a
/// `Vec<Box<dyn GuardRule>>`.
pub trait GuardRule: Send + Sync {
    /// Short name of the rule (e.g., "read-only", "no-new-fields").
    fn name(&self) -> &str;

    /// Decide whether the access may proceed.
    fn evaluate(&self, request: &AccessRequest<'_>, context: &GuardContext<'_>) -> RuleDecision;
}
