use serde::{Deserialize, Serialize};

/// Configuration for the attribute guard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Names starting with this prefix are internal bookkeeping: they are
    /// never listed, read, or written through the public API.
    pub private_prefix: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            private_prefix: "_".into(),
        }
    }
}

impl GuardConfig {
    /// Returns `true` if `name` is hidden by the private prefix.
    ///
    /// An empty prefix hides nothing.
    pub fn is_private(&self, name: &str) -> bool {
        !self.private_prefix.is_empty() && name.starts_with(self.private_prefix.as_str())
    }
}
