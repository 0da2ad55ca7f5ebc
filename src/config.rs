//! Configuration loading for request-guard
//!
//! Supports TOML configuration with embedded defaults.

use serde::Deserialize;
use std::path::PathBuf;

/// Default ceiling on request body size (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            audit_log: true,
            audit_path: Some("~/.request-guard/audit.jsonl".to_string()),
        }
    }
}

/// Request body configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Largest body accepted, in bytes
    pub max_bytes: usize,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub body: BodyConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Self {
        let config_paths = [
            dirs::home_dir().map(|p| p.join(".request-guard/config.toml")),
            Some(PathBuf::from("/etc/request-guard/config.toml")),
        ];

        Self::load_first(config_paths.into_iter().flatten())
    }

    /// Load the first existing candidate that reads and parses
    fn load_first(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded), if audit logging is enabled
    pub fn audit_path(&self) -> Option<PathBuf> {
        if !self.general.audit_log {
            return None;
        }
        self.general.audit_path.as_ref().map(|p| Self::expand_path(p))
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
audit_log = true
audit_path = "~/.request-guard/audit.jsonl"

[body]
max_bytes = 1048576
"#;
