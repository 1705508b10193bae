//! Built-in guard rules.

pub mod read_only;
pub mod structure;
pub mod visibility;

pub use read_only::ReadOnlyRule;
pub use structure::{NoDeletionRule, NoNewFieldsRule};
pub use visibility::VisibilityRule;
