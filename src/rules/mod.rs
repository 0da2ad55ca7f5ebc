//! Validation rules for request-guard
//!
//! Defines the named field patterns and the standalone secret pattern, and
//! compiles them into the process-wide [`RuleRegistry`].

pub mod fields;
pub mod registry;
pub mod secrets;

pub use registry::{init, CompiledRule, RuleRegistry};

/// A validation rule definition
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name used in field annotations
    pub name: &'static str,

    /// Regex pattern, anchored at both ends
    pub pattern: &'static str,

    /// Upper bound on candidate length in bytes, checked besides the pattern
    pub max_len: Option<usize>,

    /// Human-readable summary of what the rule accepts
    pub description: &'static str,
}

impl Rule {
    /// Create a new rule
    pub const fn new(name: &'static str, pattern: &'static str, description: &'static str) -> Self {
        Self {
            name,
            pattern,
            max_len: None,
            description,
        }
    }

    /// Add a length ceiling on top of the pattern
    pub const fn with_max_len(self, max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..self
        }
    }
}
