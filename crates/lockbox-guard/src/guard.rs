use lockbox_types::AttributeError;
use tracing::debug;

use crate::config::GuardConfig;
use crate::rule::{AccessRequest, GuardContext, GuardRule, RuleDecision, RuleResult};
use crate::rules::{NoDeletionRule, NoNewFieldsRule, ReadOnlyRule, VisibilityRule};

// ---------------------------------------------------------------------------
// GuardVerdict
// ---------------------------------------------------------------------------

/// The outcome of running an access request through the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardVerdict {
    /// The refusal, if any rule denied the access.
    pub denial: Option<AttributeError>,
    /// Per-rule results in evaluation order. Empty while constructing.
    pub rule_results: Vec<RuleResult>,
}

impl GuardVerdict {
    fn allowed(rule_results: Vec<RuleResult>) -> Self {
        Self {
            denial: None,
            rule_results,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.denial.is_none()
    }

    pub fn into_result(self) -> Result<(), AttributeError> {
        match self.denial {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

// ---------------------------------------------------------------------------
// AttributeGuard
// ---------------------------------------------------------------------------

/// The attribute guard: an ordered pipeline of rules that every access to a
/// sealed record passes through.
pub struct AttributeGuard {
    rules: Vec<Box<dyn GuardRule>>,
    config: GuardConfig,
}

impl AttributeGuard {
    /// Create a guard with an empty pipeline.
    pub fn new(config: GuardConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    /// Create a guard with the default pipeline:
    /// Visibility -> ReadOnly -> NoNewFields -> NoDeletion
    pub fn with_default_rules(config: GuardConfig) -> Self {
        let visibility = VisibilityRule::new(config.clone());
        let mut guard = Self::new(config);
        guard.add_rule(Box::new(visibility));
        guard.add_rule(Box::new(ReadOnlyRule));
        guard.add_rule(Box::new(NoNewFieldsRule));
        guard.add_rule(Box::new(NoDeletionRule));
        guard
    }

    /// Append a rule to the end of the pipeline.
    pub fn add_rule(&mut self, rule: Box<dyn GuardRule>) {
        self.rules.push(rule);
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Evaluate a request against the record state in `context`.
    ///
    /// While the record is constructing every request is allowed without
    /// consulting any rule. Once sealed the pipeline is **fail-fast**: the
    /// first denial stops evaluation.
    pub fn evaluate(&self, request: &AccessRequest<'_>, context: &GuardContext<'_>) -> GuardVerdict {
        if !context.phase.is_sealed() {
            return GuardVerdict::allowed(Vec::new());
        }

        let mut rule_results = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let decision = rule.evaluate(request, context);
            rule_results.push(RuleResult {
                rule_name: rule.name().to_string(),
                passed: decision.is_allow(),
            });

            if let RuleDecision::Deny(err) = decision {
                debug!(
                    rule = rule.name(),
                    access = %request.access,
                    attribute = request.name,
                    "attribute access denied"
                );
                return GuardVerdict {
                    denial: Some(err),
                    rule_results,
                };
            }
        }

        GuardVerdict::allowed(rule_results)
    }

    /// Evaluate and convert the verdict into a `Result`.
    pub fn check(
        &self,
        request: &AccessRequest<'_>,
        context: &GuardContext<'_>,
    ) -> Result<(), AttributeError> {
        self.evaluate(request, context).into_result()
    }
}

impl Default for AttributeGuard {
    fn default() -> Self {
        Self::with_default_rules(GuardConfig::default())
    }
}
