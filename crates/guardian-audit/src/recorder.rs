//! The audit event recorder.
//!
//! Owns the append-only log target and gates every write behind schema
//! validation: an event is either accepted in full and written as exactly
//! one line, or rejected with a diagnosable violation and not written at
//! all. The recorder is synchronous; callers bring their own concurrency.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use guardian_core::RecorderConfig;

use crate::error::AuditError;
use crate::event;
use crate::schema::SchemaValidator;
use crate::storage::{AuditSink, FileSink};

/// Governance-gated recorder for harm-override events.
pub struct EventRecorder {
    validator: SchemaValidator,
    sink: Arc<dyn AuditSink>,
}

impl std::fmt::Debug for EventRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRecorder")
            .field("schema_path", &self.validator.path())
            .field("audit_log_path", &self.sink.location())
            .finish()
    }
}

impl EventRecorder {
    /// Construct a recorder from configuration.
    ///
    /// The schema is loaded before the log target is touched, so a missing
    /// or corrupt schema document fails construction with no side effects.
    /// The log file's containing directory is created if absent; the file
    /// itself is only created on the first accepted write.
    pub fn new(config: RecorderConfig) -> Result<Self, AuditError> {
        let validator = SchemaValidator::from_path(&config.schema_path)?;
        let sink = Arc::new(FileSink::new(&config.audit_log_path)?);
        Ok(Self { validator, sink })
    }

    /// Construct a recorder over a custom append sink.
    pub fn with_sink(validator: SchemaValidator, sink: Arc<dyn AuditSink>) -> Self {
        Self { validator, sink }
    }

    /// Validate and append one harm-override event, returning the recorded
    /// `event_id`.
    ///
    /// A fresh identifier is assigned when the caller supplied none (or an
    /// empty one); a caller-supplied identifier is preserved verbatim. The
    /// identifier-augmented record is what gets validated and written, so an
    /// id that itself violates the schema is rejected like any other field.
    ///
    /// On rejection or I/O failure nothing is written and no retry is made;
    /// retry policy belongs to the caller.
    pub fn log_event(&self, mut event: Value) -> Result<String, AuditError> {
        let event_id = match event::event_id(&event) {
            Some(id) => id.to_string(),
            None => {
                let id = Uuid::new_v4().to_string();
                event::set_event_id(&mut event, &id);
                id
            }
        };

        if let Err(violation) = self.validator.validate(&event) {
            tracing::warn!(%event_id, error = %violation, "rejected governance event");
            return Err(violation);
        }

        let line = serde_json::to_string(&event)?;
        self.sink.append_line(&line)?;

        tracing::debug!(
            %event_id,
            log = %self.sink.location().display(),
            "recorded governance event"
        );

        Ok(event_id)
    }

    /// Path of the append-only audit log.
    pub fn audit_log_path(&self) -> &Path {
        self.sink.location()
    }

    /// Path of the constitutional schema document.
    pub fn schema_path(&self) -> &Path {
        self.validator.path()
    }
}
