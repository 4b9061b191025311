//! Error types for the audit crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while recording governance events.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The constitutional schema could not be read, parsed, or compiled.
    /// Fatal to recorder construction; no degraded recorder is ever returned.
    #[error("failed to load governance schema from {}: {reason}", .path.display())]
    SchemaLoad { path: PathBuf, reason: String },

    /// The event payload violates the constitutional schema. The event was
    /// not written; `path` locates the first offending field.
    #[error("event payload violates governance schema at {path}: {reason}")]
    GovernanceViolation { path: String, reason: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
