use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::{self, Write};

use lockbox_guard::{AccessRequest, AttributeGuard, GuardContext};
use lockbox_types::{Attribute, AttributeError, FieldValue, Method, RecordPhase, TYPE_NAME};
use tracing::debug;

use crate::config::RecordConfig;

/// Name of the field that is readable but never writable.
pub const READ_ONLY_FIELD: &str = "read_only";

/// A record with a fixed set of fields and methods.
///
/// Mutable fields (`x`, `y`) can be read and overwritten. The `read_only`
/// field and every [`Method`] can be read but never written. Once sealed, no
/// field can be added or removed. All access goes through [`get`](Self::get),
/// [`set`](Self::set), and [`delete`](Self::delete), each of which is decided
/// by the record's [`AttributeGuard`].
pub struct GuardedRecord {
    fields: BTreeMap<String, FieldValue>,
    read_only: BTreeSet<String>,
    phase: RecordPhase,
    guard: AttributeGuard,
}

impl GuardedRecord {
    /// Create a sealed record with the default field values
    /// (`x = 100`, `y = 50`, `read_only = 5`).
    pub fn new() -> Self {
        Self::with_config(RecordConfig::default())
    }

    /// Create a sealed record from an explicit configuration.
    pub fn with_config(config: RecordConfig) -> Self {
        let mut record = Self {
            fields: BTreeMap::new(),
            read_only: BTreeSet::new(),
            phase: RecordPhase::Constructing,
            guard: AttributeGuard::with_default_rules(config.guard),
        };

        // Bootstrap: nothing is guarded until the record is sealed.
        let defaults = config.defaults;
        for (name, value) in [
            ("x", defaults.x),
            ("y", defaults.y),
            (READ_ONLY_FIELD, defaults.read_only),
        ] {
            record.fields.insert(name.to_string(), value);
        }

        record.read_only = Method::ALL
            .iter()
            .map(|m| m.name().to_string())
            .chain(std::iter::once(READ_ONLY_FIELD.to_string()))
            .collect();

        record.seal();
        record
    }

    fn seal(&mut self) {
        self.phase = RecordPhase::Sealed;
        debug!(
            fields = self.fields.len(),
            read_only = self.read_only.len(),
            "record sealed"
        );
    }

    fn context(&self) -> GuardContext<'_> {
        GuardContext::new(self.phase, &self.read_only, &self.fields)
    }

    /// Read an attribute.
    ///
    /// Fields are looked up first, then methods. Anything else, including
    /// internal bookkeeping names, is an [`AttributeError::UnknownAttribute`].
    pub fn get(&self, name: &str) -> Result<Attribute, AttributeError> {
        self.guard.check(&AccessRequest::read(name), &self.context())?;

        if let Some(value) = self.fields.get(name) {
            return Ok(Attribute::Field(*value));
        }
        Method::from_name(name)
            .map(Attribute::Method)
            .ok_or_else(|| AttributeError::unknown(name))
    }

    /// Overwrite an existing mutable field.
    ///
    /// Fails with [`AttributeError::ReadOnlyViolation`] for read-only fields
    /// and methods, and with [`AttributeError::NoNewFieldsViolation`] for
    /// names that are not already fields. A failed write leaves the record
    /// untouched.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), AttributeError> {
        self.guard.check(&AccessRequest::write(name), &self.context())?;
        self.fields.insert(name.to_string(), value);
        Ok(())
    }

    /// Remove a field. Always fails once the record is sealed.
    pub fn delete(&mut self, name: &str) -> Result<(), AttributeError> {
        self.guard.check(&AccessRequest::delete(name), &self.context())?;
        self.fields
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| AttributeError::unknown(name))
    }

    /// Names of every declared field and method, sorted.
    ///
    /// Bookkeeping lives outside the field table, so nothing internal is listed.
    pub fn dir(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self
            .fields
            .keys()
            .map(String::as_str)
            .chain(Method::ALL.iter().map(|m| m.name()))
            .collect();
        names.into_iter().collect()
    }

    /// `x + y` at the time of the call, saturating at the `i64` bounds.
    pub fn add(&self) -> FieldValue {
        self.field("x").saturating_add(self.field("y"))
    }

    /// Print the current value of `x` to stdout.
    pub fn look_at_x(&self) {
        println!("{}", self.field("x"));
    }

    /// Print the current value of `y` to stdout.
    pub fn look_at_y(&self) {
        println!("{}", self.field("y"));
    }

    /// Write the current value of `x`, followed by a newline, to `out`.
    pub fn look_at_x_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.field("x"))
    }

    /// Write the current value of `y`, followed by a newline, to `out`.
    pub fn look_at_y_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.field("y"))
    }

    /// Call a method handle obtained from [`get`](Self::get).
    ///
    /// Returns the method's value, or `None` for the display methods.
    pub fn invoke(&self, method: Method) -> Option<FieldValue> {
        match method {
            Method::Add => Some(self.add()),
            Method::LookAtX => {
                self.look_at_x();
                None
            }
            Method::LookAtY => {
                self.look_at_y();
                None
            }
        }
    }

    pub fn phase(&self) -> RecordPhase {
        self.phase
    }

    pub fn is_sealed(&self) -> bool {
        self.phase.is_sealed()
    }

    /// Returns `true` if `name` can be read but not written.
    pub fn is_read_only(&self, name: &str) -> bool {
        self.read_only.contains(name) || Method::from_name(name).is_some()
    }

    // `x` and `y` are populated before sealing and can never be removed.
    fn field(&self, name: &str) -> FieldValue {
        self.fields.get(name).copied().unwrap_or_default()
    }
}

impl Default for GuardedRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GuardedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(TYPE_NAME)
            .field("fields", &self.fields)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use lockbox_types::AttributeErrorKind;
    use proptest::prelude::*;

    use super::*;
    use crate::config::FieldDefaults;

    fn value(record: &GuardedRecord, name: &str) -> FieldValue {
        record.get(name).unwrap().as_field().unwrap()
    }

    #[test]
    fn default_values() {
        let record = GuardedRecord::new();
        assert_eq!(value(&record, "x"), 100);
        assert_eq!(value(&record, "y"), 50);
        assert_eq!(value(&record, "read_only"), 5);
        assert!(record.is_sealed());
        assert_eq!(record.phase(), RecordPhase::Sealed);
    }

    #[test]
    fn add_matches_fields() {
        let record = GuardedRecord::new();
        assert_eq!(record.add(), value(&record, "x") + value(&record, "y"));
        assert_eq!(record.add(), 150);
    }

    #[test]
    fn mutable_fields_then_add() {
        let mut record = GuardedRecord::new();
        record.set("x", 2).unwrap();
        record.set("y", 5).unwrap();
        assert_eq!(value(&record, "x"), 2);
        assert_eq!(value(&record, "y"), 5);
        assert_eq!(record.add(), 7);
    }

    #[test]
    fn read_only_field_cannot_be_written() {
        let mut record = GuardedRecord::new();
        let err = record.set("read_only", 6).unwrap_err();
        assert_eq!(err.kind(), AttributeErrorKind::ReadOnlyViolation);
        assert_eq!(err.name(), "read_only");
        assert_eq!(value(&record, "read_only"), 5);
    }

    #[test]
    fn methods_cannot_be_reassigned() {
        let mut record = GuardedRecord::new();
        for m in Method::ALL {
            let err = record.set(m.name(), 0).unwrap_err();
            assert_eq!(err.kind(), AttributeErrorKind::ReadOnlyViolation);
            assert_eq!(record.get(m.name()).unwrap(), Attribute::Method(m));
        }
    }

    #[test]
    fn new_fields_are_refused() {
        let mut record = GuardedRecord::new();
        let err = record.set("z", 10).unwrap_err();
        assert_eq!(err, AttributeError::no_new_fields("z"));
        assert_eq!(
            record.get("z").unwrap_err().kind(),
            AttributeErrorKind::UnknownAttribute
        );
    }

    #[test]
    fn deletion_is_refused() {
        let mut record = GuardedRecord::new();
        for name in ["x", "y", "read_only", "add", "z"] {
            let err = record.delete(name).unwrap_err();
            assert_eq!(err, AttributeError::no_deletion(name));
        }
        assert_eq!(record.dir().len(), 6);
        assert_eq!(value(&record, "x"), 100);
    }

    #[test]
    fn internal_names_are_unknown() {
        let record = GuardedRecord::new();
        for name in ["internal", "_fields", "__dict__", "read_only_set"] {
            let err = record.get(name).unwrap_err();
            assert_eq!(err.kind(), AttributeErrorKind::UnknownAttribute);
        }
    }

    #[test]
    fn dir_lists_declared_names_only() {
        let record = GuardedRecord::new();
        assert_eq!(
            record.dir(),
            vec!["add", "look_at_x", "look_at_y", "read_only", "x", "y"]
        );
    }

    #[test]
    fn get_returns_method_handles() {
        let record = GuardedRecord::new();
        let add = record.get("add").unwrap();
        assert!(add.is_callable());
        assert_eq!(record.invoke(add.as_method().unwrap()), Some(150));
        assert_eq!(record.invoke(Method::LookAtX), None);
    }

    #[test]
    fn look_at_writes_current_values() {
        let mut record = GuardedRecord::new();
        let mut out = Vec::new();
        record.look_at_x_to(&mut out).unwrap();
        record.set("y", -3).unwrap();
        record.look_at_y_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "100\n-3\n");
    }

    #[test]
    fn read_only_set_includes_methods() {
        let record = GuardedRecord::new();
        assert!(record.is_read_only("read_only"));
        assert!(record.is_read_only("add"));
        assert!(record.is_read_only("look_at_y"));
        assert!(!record.is_read_only("x"));
    }

    #[test]
    fn add_saturates() {
        let mut record = GuardedRecord::new();
        record.set("x", FieldValue::MAX).unwrap();
        record.set("y", 1).unwrap();
        assert_eq!(record.add(), FieldValue::MAX);
    }

    #[test]
    fn configured_defaults() {
        let record = GuardedRecord::with_config(RecordConfig {
            defaults: FieldDefaults {
                x: 1,
                y: 2,
                read_only: 3,
            },
            ..Default::default()
        });
        assert_eq!(record.add(), 3);
        assert_eq!(value(&record, "read_only"), 3);
    }

    #[test]
    fn toml_prefix_keeps_declared_names_visible() {
        for prefix in ["a", "x", "look", "read"] {
            let config = RecordConfig::from_toml_str(&format!(
                "[guard]\nprivate_prefix = \"{prefix}\"\n"
            ))
            .unwrap();
            assert_eq!(config.guard.private_prefix, prefix);
            let mut record = GuardedRecord::with_config(config);

            assert_eq!(
                record.dir(),
                vec!["add", "look_at_x", "look_at_y", "read_only", "x", "y"]
            );
            for name in ["x", "y", "read_only"] {
                assert!(record.get(name).unwrap().as_field().is_some());
            }
            for m in Method::ALL {
                assert_eq!(record.get(m.name()).unwrap(), Attribute::Method(m));
                let err = record.set(m.name(), 1).unwrap_err();
                assert_eq!(err, AttributeError::read_only(m.name()));
            }
            record.set("x", 1).unwrap();
            assert_eq!(record.add(), 51);
        }
    }

    #[test]
    fn toml_prefix_hides_undeclared_names() {
        let config = RecordConfig::from_toml_str("[guard]\nprivate_prefix = \"in\"\n").unwrap();
        let mut record = GuardedRecord::with_config(config);
        let err = record.set("internal", 1).unwrap_err();
        assert_eq!(err, AttributeError::unknown("internal"));
        let err = record.set("_fields", 1).unwrap_err();
        assert_eq!(err.kind(), AttributeErrorKind::NoNewFieldsViolation);
    }

    #[test]
    fn debug_hides_guard() {
        let rendered = format!("{:?}", GuardedRecord::new());
        assert!(rendered.starts_with("GuardedRecord"));
        assert!(rendered.contains("Sealed"));
    }

    proptest! {
        #[test]
        fn set_then_get_roundtrips(name in prop::sample::select(vec!["x", "y"]), v in any::<i64>()) {
            let mut record = GuardedRecord::new();
            record.set(name, v).unwrap();
            prop_assert_eq!(record.get(name).unwrap(), Attribute::Field(v));
            prop_assert_eq!(record.dir().len(), 6);
        }

        #[test]
        fn failed_writes_leave_record_untouched(name in "[a-z_]{1,12}", v in any::<i64>()) {
            prop_assume!(name != "x" && name != "y");
            let mut record = GuardedRecord::new();
            prop_assert!(record.set(&name, v).is_err());
            prop_assert_eq!(value(&record, "x"), 100);
            prop_assert_eq!(value(&record, "y"), 50);
            prop_assert_eq!(value(&record, "read_only"), 5);
            prop_assert_eq!(record.dir().len(), 6);
        }
    }
}
