//! # guardian-audit
//!
//! Governance-gated audit recording for harm-override events.
//!
//! Every event submitted to the recorder is checked against the
//! constitutional schema before anything is written. Accepted events are
//! appended to a JSONL audit trail, one record per line, in acceptance
//! order; rejected events leave the trail byte-for-byte untouched and
//! surface a violation naming the offending field and the constraint it
//! broke. Records are never rewritten, reordered, or deleted.
//!
//! ## Error surface
//!
//! | Error | Meaning |
//! |-------|---------|
//! | [`AuditError::SchemaLoad`] | Schema missing or corrupt; fatal to construction |
//! | [`AuditError::GovernanceViolation`] | Payload non-conformant; event rejected |
//! | [`AuditError::Io`] | Log target unwritable; event rejected, not retried |
//!
//! ## Example
//!
//! ```rust,no_run
//! use guardian_audit::EventRecorder;
//! use guardian_core::RecorderConfig;
//! use serde_json::json;
//!
//! # fn example() -> Result<(), guardian_audit::AuditError> {
//! let recorder = EventRecorder::new(RecorderConfig::default())?;
//!
//! let event_id = recorder.log_event(json!({
//!     "event_type": "HARM_OVERRIDE",
//!     "timestamp_utc": "2026-08-23T10:15:00Z",
//!     "constitution_version": "v0.2",
//!     // ... remaining constitutional sections ...
//! }))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod event;
pub mod recorder;
pub mod schema;
pub mod storage;

pub use error::AuditError;
pub use event::{EVENT_ID_FIELD, EVENT_TYPE};
pub use recorder::EventRecorder;
pub use schema::SchemaValidator;
pub use storage::{AuditSink, FileSink};
