//! Scalar matching against named rules

use crate::error::ValidationError;
use crate::rules::{CompiledRule, RuleRegistry};

/// Resolve a rule name, treating an unknown name as the caller's error
pub fn resolve<'r>(registry: &'r RuleRegistry, rule: &str) -> Result<&'r CompiledRule, ValidationError> {
    registry
        .lookup(rule)
        .ok_or_else(|| ValidationError::UnknownRule(rule.to_string()))
}

/// Check a candidate string against a named rule.
///
/// The `email` rule rejects candidates longer than 64 bytes even when the
/// pattern accepts them.
pub fn matches(registry: &RuleRegistry, rule: &str, candidate: &str) -> Result<bool, ValidationError> {
    Ok(resolve(registry, rule)?.is_match(candidate))
}

/// Validate the string value of a named field
pub fn check_field(
    registry: &RuleRegistry,
    field: &'static str,
    rule: &str,
    candidate: &str,
) -> Result<(), ValidationError> {
    if matches(registry, rule, candidate)? {
        Ok(())
    } else {
        Err(ValidationError::PatternMismatch(field))
    }
}
