//! request-guard - Declarative validation of HTTP request bodies
//!
//! This library rejects malformed or malicious request payloads before they
//! reach business logic. Every string field of a request shape names the
//! rule it must satisfy; the engine walks the value recursively and stops at
//! the first violation.
//!
//! # Features
//!
//! - **Rule registry**: fixed, process-wide table of anchored patterns
//! - **Record walker**: nested records, optional fields, arrays and vectors
//! - **Strict surface**: unannotated strings, maps, nil and double-optional
//!   fields are rejected rather than skipped
//! - **Secret check**: standalone format check for session tokens
//! - **Audit logging**: JSONL log of all decisions with the internal reason
//!
//! # Example
//!
//! ```
//! use request_guard::{validate_struct, validated_record, ValidationError};
//!
//! validated_record! {
//!     pub struct Sample {
//!         pub value: String => "user_name",
//!     }
//! }
//!
//! let ok = Sample { value: "ocelotcloud".to_string() };
//! assert!(validate_struct(&ok).is_ok());
//!
//! let bad = Sample { value: "Ocelot!".to_string() };
//! assert_eq!(
//!     validate_struct(&bad),
//!     Err(ValidationError::PatternMismatch("value"))
//! );
//! ```

mod macros;

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod requests;
pub mod rules;
pub mod shape;

// Re-exports for convenience
pub use config::Config;
pub use engine::{matches, validate_struct, Validator};
pub use error::{ErrorKind, RegistryError, ValidationError};
pub use input::{read_body, read_request, BodyError};
pub use output::{ResponseBody, Verdict};
pub use requests::{Request, RequestKind};
pub use rules::secrets::validate_secret;
pub use rules::RuleRegistry;
pub use shape::{FieldDescriptor, Inspect, Kind, Record, Shape};
