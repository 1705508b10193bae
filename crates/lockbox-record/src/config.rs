use lockbox_guard::GuardConfig;
use lockbox_types::FieldValue;
use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// Initial values written into a record before it is sealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    pub x: FieldValue,
    pub y: FieldValue,
    pub read_only: FieldValue,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            x: 100,
            y: 50,
            read_only: 5,
        }
    }
}

/// Configuration for constructing a [`GuardedRecord`](crate::GuardedRecord).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    pub defaults: FieldDefaults,
    pub guard: GuardConfig,
}

impl RecordConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    ///
    /// ```toml
    /// [defaults]
    /// x = 1
    ///
    /// [guard]
    /// private_prefix = "__"
    /// ```
    pub fn from_toml_str(input: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(input)?)
    }
}
