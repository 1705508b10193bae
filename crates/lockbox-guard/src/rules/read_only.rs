use lockbox_types::{Access, AttributeError, Method};

use crate::rule::{AccessRequest, GuardContext, GuardRule, RuleDecision};

/// Refuses writes to read-only fields and to methods.
///
/// Methods are always read-only, whether or not they appear in the explicit
/// read-only set.
pub struct ReadOnlyRule;

impl GuardRule for ReadOnlyRule {
    fn name(&self) -> &str {
        "read-only"
    }

    fn evaluate(&self, request: &AccessRequest<'_>, context: &GuardContext<'_>) -> RuleDecision {
        if request.access != Access::Write {
            return RuleDecision::Allow;
        }
        if context.is_read_only(request.name) || Method::from_name(request.name).is_some() {
            return RuleDecision::Deny(AttributeError::read_only(request.name));
        }
        RuleDecision::Allow
    }
}
