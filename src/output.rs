//! Response shaping for validation outcomes
//!
//! Only the generic public message ever reaches the client; the precise
//! reason stays in the [`Verdict`] for logging.

use serde::Serialize;

use crate::error::ErrorKind;
use crate::input::BodyError;

/// Response body sent back to the client
#[derive(Debug, Serialize)]
pub struct ResponseBody {
    /// HTTP status code
    pub status: u16,

    /// Generic error message, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of checking one request body or token
#[derive(Debug, Clone)]
pub enum Verdict {
    /// Input accepted, the caller may proceed
    Accepted,

    /// Input refused
    Rejected {
        status: u16,
        message: &'static str,
        kind: Option<ErrorKind>,
        reason: String,
    },
}

impl Verdict {
    /// Create a rejection from a body intake failure
    pub fn from_body_error(error: &BodyError) -> Self {
        Verdict::Rejected {
            status: error.status(),
            message: error.public_message(),
            kind: error.validation_kind(),
            reason: error.to_string(),
        }
    }

    /// Create a verdict for a standalone secret check
    pub fn from_secret_check(valid: bool) -> Self {
        if valid {
            Verdict::Accepted
        } else {
            Verdict::Rejected {
                status: 400,
                message: "invalid input",
                kind: Some(ErrorKind::PatternMismatch),
                reason: "secret does not match the secret format".to_string(),
            }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn status(&self) -> u16 {
        match self {
            Verdict::Accepted => 200,
            Verdict::Rejected { status, .. } => *status,
        }
    }

    /// Internal reason, for server-side logs only
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected { reason, .. } => Some(reason),
        }
    }
}

impl ResponseBody {
    /// Create output from a Verdict
    pub fn from_verdict(verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Accepted => ResponseBody {
                status: 200,
                error: None,
            },
            Verdict::Rejected {
                status, message, ..
            } => ResponseBody {
                status: *status,
                error: Some(message.to_string()),
            },
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
