//! Attribute guard for lockbox.
//!
//! Every read, write, and delete on a sealed record is decided here. The
//! guard runs an ordered pipeline of rules (visibility, read-only,
//! no-new-fields, no-deletion) and stops at the first denial. A record that
//! is still constructing bypasses the pipeline entirely.
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::{BTreeMap, BTreeSet};
//!
//! use lockbox_guard::{AccessRequest, AttributeGuard, GuardConfig, GuardContext};
//! use lockbox_types::{AttributeErrorKind, RecordPhase};
//!
//! let guard = AttributeGuard::with_default_rules(GuardConfig::default());
//! let fields = BTreeMap::from([("x".to_string(), 1)]);
//! let read_only = BTreeSet::new();
//! let ctx = GuardContext::new(RecordPhase::Sealed, &read_only, &fields);
//!
//! assert!(guard.check(&AccessRequest::write("x"), &ctx).is_ok());
//! let err = guard.check(&AccessRequest::write("z"), &ctx).unwrap_err();
//! assert_eq!(err.kind(), AttributeErrorKind::NoNewFieldsViolation);
//! ```

pub mod config;
pub mod guard;
pub mod rule;
pub mod rules;

pub use config::GuardConfig;
pub use guard::{AttributeGuard, GuardVerdict};
pub use rule::{AccessRequest, GuardContext, GuardRule, RuleDecision, RuleResult};
pub use rules::{NoDeletionRule, NoNewFieldsRule, ReadOnlyRule, VisibilityRule};
