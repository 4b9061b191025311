//! Append sinks for the audit log.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AuditError;

/// A durable append-only line target.
///
/// Implementations must write each line atomically with respect to other
/// appends through the same sink and flush before returning, so a concurrent
/// reader of the target never observes a partial record.
pub trait AuditSink: Send + Sync {
    /// Append one serialized record, followed by a newline.
    fn append_line(&self, line: &str) -> Result<(), AuditError>;

    /// Location of the underlying target.
    fn location(&self) -> &Path;
}

/// File-backed sink writing newline-delimited records.
pub struct FileSink {
    path: PathBuf,
    // Serializes appends from this instance so callers on different threads
    // can never interleave partial lines.
    write_lock: Mutex<()>,
}

impl FileSink {
    /// Create a sink targeting `path`.
    ///
    /// Creates the containing directory if absent. The file itself is only
    /// created by the first append, never at construction.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }
}

impl AuditSink for FileSink {
    fn append_line(&self, line: &str) -> Result<(), AuditError> {
        // Buffer the full record before touching the file so one write call
        // carries the whole line.
        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');

        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
