//! Field rules referenced by record annotations

use crate::rules::Rule;

/// Longest email address the account store can hold.
pub const EMAIL_MAX_LEN: usize = 64;

/// All rules a record field may name
pub const FIELD_RULES: &[Rule] = &[
    Rule::new(
        "user_name",
        r"^[a-z0-9]{3,20}$",
        "3-20 lowercase letters and digits",
    ),
    Rule::new(
        "app_name",
        r"^[a-z0-9-]{3,20}$",
        "3-20 lowercase letters, digits and hyphens",
    ),
    Rule::new(
        "version_name",
        r"^[a-z0-9.]{3,20}$",
        "3-20 lowercase letters, digits and dots",
    ),
    Rule::new(
        "search_term",
        r"^[a-z0-9]{0,20}$",
        "up to 20 lowercase letters and digits, may be empty",
    ),
    Rule::new(
        "password",
        r"^[a-zA-Z0-9._-]{8,30}$",
        "8-30 letters, digits and ._-",
    ),
    // The length ceiling is enforced outside the pattern; see EMAIL_MAX_LEN.
    Rule::new(
        "email",
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
        "email address of at most 64 characters",
    )
    .with_max_len(EMAIL_MAX_LEN),
    Rule::new("number", r"^[0-9]{1,20}$", "1-20 digits, no sign"),
    Rule::new(
        "host",
        r"^[a-zA-Z0-9:._-]{0,64}$",
        "up to 64 letters, digits and :._-, may be empty",
    ),
    Rule::new(
        "known_hosts",
        r"^[A-Za-z0-9.:,/_+=#@\[\]| \r\n-]*$",
        "SSH known_hosts file content",
    ),
    Rule::new(
        "restic_backup_id",
        r"^[a-f0-9]{64}$",
        "restic snapshot id, 64 lowercase hex characters",
    ),
];
