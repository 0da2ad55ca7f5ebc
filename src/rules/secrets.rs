//! Standalone secret token rule
//!
//! Session cookies and similar tokens never travel inside request bodies, so
//! this rule is kept out of the field registry. A record annotation cannot
//! name it.

use crate::rules::Rule;

/// Name reserved for the secret rule
pub const SECRET_RULE_NAME: &str = "secret";

/// Exactly 64 lowercase hex characters
pub const SECRET_RULE: Rule = Rule::new(
    SECRET_RULE_NAME,
    r"^[a-f0-9]{64}$",
    "64 lowercase hex characters",
);

/// Check a cookie or session token against the secret rule
pub fn validate_secret(token: &str) -> bool {
    crate::rules::RuleRegistry::global().validate_secret(token)
}
