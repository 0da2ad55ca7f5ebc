//! Field classification
//!
//! Decides, for one field, what the walker has to do with it. Shapes that
//! are rejected outright come back as errors; everything else is an
//! [`Action`].

use crate::error::ValidationError;
use crate::shape::{FieldDescriptor, Inspect, Kind, Record, Shape};

/// What the walker must do with a classified field
pub enum Action<'a> {
    /// Match one string against the field's rule
    ValidateScalar { rule: &'static str, value: &'a str },

    /// Match every element of a string sequence against the field's rule
    ValidateEach {
        rule: &'static str,
        values: Vec<&'a str>,
    },

    /// Validate a nested record
    Recurse(&'a dyn Record),

    /// Validate every element of a record or union sequence
    ValidateElements(Vec<Element<'a>>),

    /// Nothing to validate
    Skip,
}

/// One element of a record or union sequence, already resolved
pub enum Element<'a> {
    /// String held by a union element, checked against the container's rule
    Scalar { rule: &'static str, value: &'a str },

    /// Record element, or record held by a union element
    Record(&'a dyn Record),
}

/// Replace dynamic values by the shape of the value they hold
pub fn resolve_dynamic(shape: Shape<'_>) -> Shape<'_> {
    match shape {
        Shape::Dynamic(inner) => resolve_dynamic(inner.shape()),
        other => other,
    }
}

/// Classify one field
pub fn classify<'a>(field: &FieldDescriptor<'a>) -> Result<Action<'a>, ValidationError> {
    if !field.public {
        return Err(ValidationError::NonPublicField(field.name));
    }

    let mut shape = resolve_dynamic(field.value.shape());

    if let Shape::Pointer { target, value } = shape {
        if target == Kind::Pointer {
            return Err(ValidationError::DoublePointer(field.name));
        }
        let pointee = value.ok_or(ValidationError::NilPointer(field.name))?;
        shape = resolve_dynamic(pointee.shape());
    }

    match shape {
        // Only reachable through a dynamic pointee that is itself optional.
        Shape::Pointer { .. } => Err(ValidationError::DoublePointer(field.name)),
        Shape::Map => Err(ValidationError::MapField(field.name)),
        Shape::Str(value) => Ok(Action::ValidateScalar {
            rule: required_rule(field)?,
            value,
        }),
        Shape::Sequence { element, items, .. } => classify_sequence(field, element, items),
        Shape::Record(record) => Ok(Action::Recurse(record)),
        Shape::Scalar(_) => Ok(Action::Skip),
        Shape::Dynamic(_) => unreachable!("dynamic shapes are resolved above"),
    }
}

/// Sequences of strings need a resolvable rule even when they are empty.
/// This is stricter than checking element by element, which lets an empty
/// sequence with a missing or unknown annotation through.
fn classify_sequence<'a>(
    field: &FieldDescriptor<'a>,
    element: Kind,
    items: Vec<&'a dyn Inspect>,
) -> Result<Action<'a>, ValidationError> {
    match element {
        Kind::Pointer => Err(ValidationError::PointerSequence(field.name)),
        Kind::String => {
            let rule = required_rule(field)?;
            let values = items
                .into_iter()
                .filter_map(|item| match item.shape() {
                    Shape::Str(value) => Some(value),
                    _ => None,
                })
                .collect();
            Ok(Action::ValidateEach { rule, values })
        }
        Kind::Struct | Kind::Dynamic => classify_elements(field, items),
        _ => Ok(Action::Skip),
    }
}

/// Resolve each element and apply the sequence rules to what it holds.
///
/// A union element holding an optional value counts as a pointer element.
fn classify_elements<'a>(
    field: &FieldDescriptor<'a>,
    items: Vec<&'a dyn Inspect>,
) -> Result<Action<'a>, ValidationError> {
    let mut elements = Vec::with_capacity(items.len());
    for item in items {
        match resolve_dynamic(item.shape()) {
            Shape::Pointer { .. } => return Err(ValidationError::PointerSequence(field.name)),
            Shape::Str(value) => elements.push(Element::Scalar {
                rule: required_rule(field)?,
                value,
            }),
            Shape::Record(record) => elements.push(Element::Record(record)),
            _ => {}
        }
    }
    Ok(Action::ValidateElements(elements))
}

fn required_rule(field: &FieldDescriptor<'_>) -> Result<&'static str, ValidationError> {
    field.rule.ok_or(ValidationError::MissingRule(field.name))
}
