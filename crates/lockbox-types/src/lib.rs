//! Foundation types for lockbox.
//!
//! This crate provides the vocabulary shared by the guard and the record:
//! what an attribute is, which methods exist, which lifecycle phase a record
//! is in, and how a refused access is reported.
//!
//! # Key Types
//!
//! - [`FieldValue`] — The value stored in a field slot
//! - [`Method`] — The fixed set of methods every record exposes
//! - [`Attribute`] — Result of a read: a field value or a method handle
//! - [`Access`] — The kind of access being requested
//! - [`RecordPhase`] — Lifecycle state (`Constructing` → `Sealed`)
//! - [`AttributeError`] — Why an access was refused

pub mod access;
pub mod attribute;
pub mod error;

pub use access::{Access, RecordPhase};
pub use attribute::{Attribute, FieldValue, Method};
pub use error::{AttributeError, AttributeErrorKind, TYPE_NAME};
