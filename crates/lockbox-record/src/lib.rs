//! Sealed, guarded record.
//!
//! A [`GuardedRecord`] exposes a fixed set of named fields and methods:
//! mutable fields can be read and written, read-only fields can only be
//! read, methods can never be reassigned, and once the record is sealed no
//! field can be added or removed.
//!
//! # Quick Start
//!
//! ```rust
//! use lockbox_record::GuardedRecord;
//! use lockbox_types::AttributeErrorKind;
//!
//! let mut record = GuardedRecord::new();
//! record.set("x", 2).unwrap();
//! record.set("y", 5).unwrap();
//! assert_eq!(record.add(), 7);
//!
//! let err = record.set("read_only", 6).unwrap_err();
//! assert_eq!(err.kind(), AttributeErrorKind::ReadOnlyViolation);
//! ```

pub mod config;
pub mod error;
pub mod record;

pub use config::{FieldDefaults, RecordConfig};
pub use error::{ConfigError, ConfigResult};
pub use record::{GuardedRecord, READ_ONLY_FIELD};
