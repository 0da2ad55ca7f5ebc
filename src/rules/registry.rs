//! Compiled rule registry
//!
//! The process-wide registry is compiled on first use and read-only
//! afterwards. Call [`init`] at startup so a broken pattern fails there
//! instead of on the first request.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::error::RegistryError;
use crate::rules::fields::FIELD_RULES;
use crate::rules::secrets::SECRET_RULE;
use crate::rules::Rule;

static REGISTRY: Lazy<RuleRegistry> = Lazy::new(|| match RuleRegistry::builtin() {
    Ok(registry) => registry,
    Err(e) => panic!("built-in validation rules failed to compile: {}", e),
});

/// Force compilation of the built-in rules
pub fn init() {
    Lazy::force(&REGISTRY);
}

/// A rule with its compiled pattern
#[derive(Debug)]
pub struct CompiledRule {
    rule: &'static Rule,
    regex: Regex,
}

impl CompiledRule {
    fn compile(rule: &'static Rule) -> Result<Self, RegistryError> {
        let regex = Regex::new(rule.pattern).map_err(|source| RegistryError::InvalidPattern {
            name: rule.name,
            source,
        })?;
        Ok(Self { rule, regex })
    }

    pub fn rule(&self) -> &'static Rule {
        self.rule
    }

    /// Full-match the candidate, honoring the length ceiling if the rule has one
    pub fn is_match(&self, candidate: &str) -> bool {
        if let Some(max_len) = self.rule.max_len {
            if candidate.len() > max_len {
                return false;
            }
        }
        self.regex.is_match(candidate)
    }
}

/// Immutable mapping from rule name to compiled rule
#[derive(Debug)]
pub struct RuleRegistry {
    rules: HashMap<&'static str, CompiledRule>,
    order: Vec<&'static str>,
    secret: CompiledRule,
}

impl RuleRegistry {
    /// Compile a registry from a field rule table and a secret rule
    pub fn compile(rules: &'static [Rule], secret: &'static Rule) -> Result<Self, RegistryError> {
        let mut compiled = HashMap::with_capacity(rules.len());
        let mut order = Vec::with_capacity(rules.len());

        for rule in rules {
            if rule.name == secret.name {
                return Err(RegistryError::ReservedName(rule.name));
            }
            if compiled.contains_key(rule.name) {
                return Err(RegistryError::DuplicateRule(rule.name));
            }
            compiled.insert(rule.name, CompiledRule::compile(rule)?);
            order.push(rule.name);
        }

        Ok(Self {
            rules: compiled,
            order,
            secret: CompiledRule::compile(secret)?,
        })
    }

    /// Compile the built-in rule tables
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::compile(FIELD_RULES, &SECRET_RULE)
    }

    /// The process-wide registry
    pub fn global() -> &'static RuleRegistry {
        &REGISTRY
    }

    /// Look up a field rule by name. The secret rule is never returned.
    pub fn lookup(&self, name: &str) -> Option<&CompiledRule> {
        self.rules.get(name)
    }

    pub fn validate_secret(&self, token: &str) -> bool {
        self.secret.is_match(token)
    }

    /// Field rules in table order
    pub fn rules(&self) -> impl Iterator<Item = &'static Rule> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.rules.get(name).map(|c| c.rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
