//! # guardian-core
//!
//! Shared configuration types for the Guardian audit recorder.
//!
//! The recorder itself lives in `guardian-audit`; this crate holds the
//! configuration it is constructed from, so embedding applications can load
//! and validate configuration without pulling in the recording machinery.

pub mod config;

pub use config::{ConfigError, RecorderConfig, DEFAULT_AUDIT_LOG_PATH, DEFAULT_SCHEMA_PATH};
