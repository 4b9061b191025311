//! Recorder configuration.
//!
//! Configuration can be supplied inline by the embedding application or
//! loaded from a YAML file. The default locations are plain relative paths
//! resolved against the caller's working context; the core makes no
//! assumptions about where it is installed.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the constitutional schema document.
pub const DEFAULT_SCHEMA_PATH: &str = "governance/HARM_OVERRIDE_EVENT_SCHEMA.json";

/// Default location of the append-only audit log.
pub const DEFAULT_AUDIT_LOG_PATH: &str = "audit_events.jsonl";

/// Errors raised while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid YAML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Configuration for the audit event recorder.
///
/// Both paths are overridable per instance; fields omitted from a config
/// file fall back to the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Path to the constitutional schema document (JSON Schema).
    #[serde(default = "default_schema_path")]
    pub schema_path: PathBuf,

    /// Path to the append-only audit log (JSONL, one event per line).
    #[serde(default = "default_audit_log_path")]
    pub audit_log_path: PathBuf,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            schema_path: default_schema_path(),
            audit_log_path: default_audit_log_path(),
        }
    }
}

impl RecorderConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }
}

fn default_schema_path() -> PathBuf {
    PathBuf::from(DEFAULT_SCHEMA_PATH)
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_AUDIT_LOG_PATH)
}
