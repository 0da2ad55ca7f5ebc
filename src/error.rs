//! Error types for request-guard
//!
//! The message wording of [`ValidationError`] is stable and may be matched
//! on by callers; never change it without a version bump.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Coarse classification of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Top-level value is not a record
    ShapeError,

    /// Field cannot be introspected (non-public)
    AccessError,

    /// String field lacks a rule annotation
    AnnotationMissing,

    /// Rule annotation does not resolve in the registry
    AnnotationUnknown,

    /// Value does not satisfy its rule
    PatternMismatch,

    /// Map, pointer-sequence or double-pointer field
    ShapeRejected,

    /// Pointer field is nil
    NilReference,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ShapeError => "shape_error",
            ErrorKind::AccessError => "access_error",
            ErrorKind::AnnotationMissing => "annotation_missing",
            ErrorKind::AnnotationUnknown => "annotation_unknown",
            ErrorKind::PatternMismatch => "pattern_mismatch",
            ErrorKind::ShapeRejected => "shape_rejected",
            ErrorKind::NilReference => "nil_reference",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single error produced by a failed traversal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input must be a data structure, but was: {0}")]
    NotARecord(crate::shape::Kind),

    #[error("cannot validate non-public fields: {0}")]
    NonPublicField(&'static str),

    #[error("field is double pointer: {0}")]
    DoublePointer(&'static str),

    #[error("pointer field is nil: {0}")]
    NilPointer(&'static str),

    #[error("map fields are not allowed: {0}")]
    MapField(&'static str),

    #[error("no validation tag found for field: {0}")]
    MissingRule(&'static str),

    #[error("unknown validation type: {0}")]
    UnknownRule(String),

    #[error("field does not match regex: {0}")]
    PatternMismatch(&'static str),

    #[error("field of array or slice of pointers found: {0}")]
    PointerSequence(&'static str),
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::NotARecord(_) => ErrorKind::ShapeError,
            ValidationError::NonPublicField(_) => ErrorKind::AccessError,
            ValidationError::MissingRule(_) => ErrorKind::AnnotationMissing,
            ValidationError::UnknownRule(_) => ErrorKind::AnnotationUnknown,
            ValidationError::PatternMismatch(_) => ErrorKind::PatternMismatch,
            ValidationError::DoublePointer(_)
            | ValidationError::MapField(_)
            | ValidationError::PointerSequence(_) => ErrorKind::ShapeRejected,
            ValidationError::NilPointer(_) => ErrorKind::NilReference,
        }
    }

    /// Name of the offending field, if the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NotARecord(_) | ValidationError::UnknownRule(_) => None,
            ValidationError::NonPublicField(name)
            | ValidationError::DoublePointer(name)
            | ValidationError::NilPointer(name)
            | ValidationError::MapField(name)
            | ValidationError::MissingRule(name)
            | ValidationError::PatternMismatch(name)
            | ValidationError::PointerSequence(name) => Some(name),
        }
    }
}

/// Failure to build a rule registry from a rule table
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("rule {name} has invalid pattern: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("rule {0} is defined more than once")]
    DuplicateRule(&'static str),

    #[error("rule name {0} is reserved for the standalone secret check")]
    ReservedName(&'static str),
}
