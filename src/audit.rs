//! JSONL audit logging for request-guard
//!
//! Records every validation decision, including the precise internal reason
//! that is withheld from clients. Checked values themselves are not logged.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ErrorKind;
use crate::output::Verdict;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Accepted,
    Rejected,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the decision
    pub timestamp: DateTime<Utc>,

    pub level: LogLevel,

    /// What was checked: a request kind name, or "secret"
    pub subject: String,

    /// HTTP status returned to the client
    pub status: u16,

    /// Validation error kind (if validation failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,

    /// Precise reason for a rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry from a verdict
    pub fn new(subject: &str, verdict: &Verdict) -> Self {
        let (level, kind, reason) = match verdict {
            Verdict::Accepted => (LogLevel::Accepted, None, None),
            Verdict::Rejected { kind, reason, .. } => {
                (LogLevel::Rejected, *kind, Some(reason.clone()))
            }
        };

        Self {
            timestamp: Utc::now(),
            level,
            subject: subject.to_string(),
            status: verdict.status(),
            kind,
            reason,
        }
    }
}

/// Audit logger
#[derive(Default)]
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger; logging is disabled if the file cannot be opened
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a verdict
    pub fn log_verdict(&mut self, subject: &str, verdict: &Verdict) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(subject, verdict);
        self.log(&entry)
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}
