use lockbox_types::{Access, AttributeError};

use crate::rule::{AccessRequest, GuardContext, GuardRule, RuleDecision};

/// Keeps the sealed field set closed to additions.
pub struct NoNewFieldsRule;

impl GuardRule for NoNewFieldsRule {
    fn name(&self) -> &str {
        "no-new-fields"
    }

    fn evaluate(&self, request: &AccessRequest<'_>, context: &GuardContext<'_>) -> RuleDecision {
        if request.access == Access::Write && !context.has_field(request.name) {
            return RuleDecision::Deny(AttributeError::no_new_fields(request.name));
        }
        RuleDecision::Allow
    }
}

/// Keeps the sealed field set closed to removals.
pub struct NoDeletionRule;

impl GuardRule for NoDeletionRule {
    fn name(&self) -> &str {
        "no-deletion"
    }

    fn evaluate(&self, request: &AccessRequest<'_>, _context: &GuardContext<'_>) -> RuleDecision {
        if request.access == Access::Delete {
            return RuleDecision::Deny(AttributeError::no_deletion(request.name));
        }
        RuleDecision::Allow
    }
}
