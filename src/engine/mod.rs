//! Validation engine for request-guard
//!
//! Walks a record field by field, classifies each field and either matches
//! it against its rule or recurses into it. The first violation ends the
//! walk and is the only error reported.

pub mod classify;
pub mod scalar;

use crate::error::ValidationError;
use crate::rules::RuleRegistry;
use crate::shape::{FieldDescriptor, Inspect, Record, Shape};

use classify::{Action, Element};

/// Validate a record against the process-wide registry
pub fn validate_struct(value: &dyn Inspect) -> Result<(), ValidationError> {
    Validator::default().validate_struct(value)
}

/// Check a single string against a named rule in the process-wide registry
pub fn matches(rule: &str, candidate: &str) -> Result<bool, ValidationError> {
    Validator::default().matches(rule, candidate)
}

/// The record walker
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r RuleRegistry,
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new(RuleRegistry::global())
    }
}

impl<'r> Validator<'r> {
    /// Create a validator over the given registry
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }

    /// Main entry point: validate a value that must resolve to a record.
    ///
    /// Optional values and dynamic values are unwrapped first; anything that
    /// does not end in a record is rejected with its kind.
    pub fn validate_struct(&self, value: &dyn Inspect) -> Result<(), ValidationError> {
        let record = resolve_record(value)?;
        self.walk(record)
    }

    pub fn matches(&self, rule: &str, candidate: &str) -> Result<bool, ValidationError> {
        scalar::matches(self.registry, rule, candidate)
    }

    pub fn registry(&self) -> &'r RuleRegistry {
        self.registry
    }

    fn walk(&self, record: &dyn Record) -> Result<(), ValidationError> {
        for field in record.fields() {
            self.validate_field(&field)?;
        }
        Ok(())
    }

    fn validate_field(&self, field: &FieldDescriptor<'_>) -> Result<(), ValidationError> {
        match classify::classify(field)? {
            Action::ValidateScalar { rule, value } => {
                scalar::check_field(self.registry, field.name, rule, value)
            }
            Action::ValidateEach { rule, values } => {
                let compiled = scalar::resolve(self.registry, rule)?;
                match values.into_iter().find(|value| !compiled.is_match(value)) {
                    Some(_) => Err(ValidationError::PatternMismatch(field.name)),
                    None => Ok(()),
                }
            }
            Action::Recurse(record) => self.walk(record),
            Action::ValidateElements(elements) => {
                elements.into_iter().try_for_each(|element| match element {
                    Element::Scalar { rule, value } => {
                        scalar::check_field(self.registry, field.name, rule, value)
                    }
                    Element::Record(record) => self.walk(record),
                })
            }
            Action::Skip => Ok(()),
        }
    }
}

fn resolve_record(value: &dyn Inspect) -> Result<&dyn Record, ValidationError> {
    let mut shape = value.shape();
    loop {
        shape = match shape {
            Shape::Record(record) => return Ok(record),
            Shape::Pointer {
                value: Some(inner), ..
            } => inner.shape(),
            Shape::Dynamic(inner) => inner.shape(),
            other => return Err(ValidationError::NotARecord(other.kind())),
        };
    }
}
