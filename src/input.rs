//! Request body intake
//!
//! Reads a bounded JSON body, deserializes it into a request shape and
//! validates the result before handing it to the caller.

use serde::de::DeserializeOwned;
use std::io::{self, Read};
use thiserror::Error;

use crate::engine::validate_struct;
use crate::error::{ErrorKind, ValidationError};
use crate::requests::{Request, RequestKind};
use crate::shape::Inspect;

/// Why a request body was refused
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("failed to read request body: {0}")]
    Read(#[from] io::Error),

    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("failed to parse request body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),
}

impl BodyError {
    /// HTTP status the transport should answer with
    pub fn status(&self) -> u16 {
        match self {
            BodyError::TooLarge { .. } => 413,
            _ => 400,
        }
    }

    /// Message that is safe to send to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            BodyError::Read(_) => "unable to read request body",
            BodyError::TooLarge { .. } => "request body too large",
            BodyError::Parse(_) => "invalid request body",
            BodyError::Invalid(_) => "invalid input",
        }
    }

    /// Validation error kind, if validation is what failed
    pub fn validation_kind(&self) -> Option<ErrorKind> {
        match self {
            BodyError::Invalid(e) => Some(e.kind()),
            _ => None,
        }
    }
}

/// Read at most `limit` bytes from the reader
pub fn read_limited<R: Read>(reader: R, limit: usize) -> Result<Vec<u8>, BodyError> {
    let mut body = Vec::new();
    reader
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut body)?;

    if body.len() > limit {
        return Err(BodyError::TooLarge { limit });
    }
    Ok(body)
}

/// Deserialize and validate a body that is already in memory
pub fn parse_body<T>(body: &[u8]) -> Result<T, BodyError>
where
    T: DeserializeOwned + Inspect,
{
    let value: T = serde_json::from_slice(body)?;
    validate_struct(&value)?;
    Ok(value)
}

/// Read, deserialize and validate a body of a statically known shape
pub fn read_body<T, R>(reader: R, limit: usize) -> Result<T, BodyError>
where
    T: DeserializeOwned + Inspect,
    R: Read,
{
    let body = read_limited(reader, limit)?;
    parse_body(&body)
}

/// Read, deserialize and validate a body whose shape is chosen at runtime
pub fn read_request<R: Read>(kind: RequestKind, reader: R, limit: usize) -> Result<Request, BodyError> {
    let body = read_limited(reader, limit)?;
    let request = kind.parse(&body)?;
    validate_struct(&request)?;
    Ok(request)
}
