use lockbox_types::{Access, AttributeError, Method};

use crate::config::GuardConfig;
use crate::rule::{AccessRequest, GuardContext, GuardRule, RuleDecision};

/// Hides internal bookkeeping names.
///
/// Reads and writes of undeclared names carrying the private prefix are
/// reported as unknown attributes, exactly as if the name did not exist.
/// Declared fields and methods are always visible, whatever the prefix.
pub struct VisibilityRule {
    config: GuardConfig,
}

impl VisibilityRule {
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }
}

impl GuardRule for VisibilityRule {
    fn name(&self) -> &str {
        "visibility"
    }

    fn evaluate(&self, request: &AccessRequest<'_>, context: &GuardContext<'_>) -> RuleDecision {
        if request.access == Access::Delete {
            return RuleDecision::Allow;
        }
        if context.has_field(request.name) || Method::from_name(request.name).is_some() {
            return RuleDecision::Allow;
        }
        if self.config.is_private(request.name) {
            return RuleDecision::Deny(AttributeError::unknown(request.name));
        }
        RuleDecision::Allow
    }
}
