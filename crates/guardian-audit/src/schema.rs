//! Schema loading and payload conformance checking.
//!
//! The constitutional rules are expressed once, declaratively, in the schema
//! document; nothing here duplicates them as imperative checks.

use std::fs;
use std::path::{Path, PathBuf};

use jsonschema::Validator;
use serde_json::Value;

use crate::error::AuditError;

/// Checks event payloads against the constitutional schema.
///
/// The schema document is read and compiled once at construction and is
/// immutable for the lifetime of the validator; picking up a revised
/// document means constructing a new instance.
#[derive(Debug)]
pub struct SchemaValidator {
    path: PathBuf,
    compiled: Validator,
}

impl SchemaValidator {
    /// Load and compile the schema document at `path`.
    ///
    /// A missing, unreadable, or malformed document fails with
    /// [`AuditError::SchemaLoad`]; no partially-loaded validator is returned.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref().to_path_buf();

        let raw = fs::read_to_string(&path).map_err(|e| AuditError::SchemaLoad {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let document: Value = serde_json::from_str(&raw).map_err(|e| AuditError::SchemaLoad {
            path: path.clone(),
            reason: format!("not valid JSON: {e}"),
        })?;

        let compiled = jsonschema::validator_for(&document).map_err(|e| AuditError::SchemaLoad {
            path: path.clone(),
            reason: format!("schema failed to compile: {e}"),
        })?;

        Ok(Self { path, compiled })
    }

    /// Path of the schema document this validator was built from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check `event` against the schema.
    ///
    /// On non-conformance, surfaces exactly one violation per call: the
    /// first error reported by the engine, located by its instance path.
    ///
    /// `format` keywords (such as `date-time` on `timestamp_utc`) are
    /// annotations under draft 2020-12 and are not asserted; a field
    /// carrying one is only checked for its declared type.
    pub fn validate(&self, event: &Value) -> Result<(), AuditError> {
        if let Some(error) = self.compiled.iter_errors(event).next() {
            let path = error.instance_path().to_string();
            let path = if path.is_empty() {
                "(root)".to_string()
            } else {
                path
            };
            return Err(AuditError::GovernanceViolation {
                path,
                reason: format!("{}", error),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_schema(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("schema.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    const TOY_SCHEMA: &str = r#"{
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {"type": "string", "minLength": 3},
            "tags": {"type": "array", "minItems": 1}
        }
    }"#;

    #[test]
    fn missing_schema_file_fails_load() {
        let err = SchemaValidator::from_path("/nonexistent/schema.json").unwrap_err();
        assert!(matches!(err, AuditError::SchemaLoad { .. }));
    }

    #[test]
    fn malformed_schema_json_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(&dir, "{ not json");
        let err = SchemaValidator::from_path(&path).unwrap_err();
        match err {
            AuditError::SchemaLoad { reason, .. } => assert!(reason.contains("not valid JSON")),
            other => panic!("expected SchemaLoad, got {other:?}"),
        }
    }

    #[test]
    fn uncompilable_schema_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(&dir, r#"{"type": "no_such_type"}"#);
        let err = SchemaValidator::from_path(&path).unwrap_err();
        assert!(matches!(err, AuditError::SchemaLoad { .. }));
    }

    #[test]
    fn conformant_payload_passes() {
        let dir = tempfile::tempdir().unwrap();
        let validator = SchemaValidator::from_path(write_schema(&dir, TOY_SCHEMA)).unwrap();
        validator
            .validate(&json!({"name": "alice", "tags": ["one"]}))
            .unwrap();
    }

    #[test]
    fn missing_required_field_reports_root_path() {
        let dir = tempfile::tempdir().unwrap();
        let validator = SchemaValidator::from_path(write_schema(&dir, TOY_SCHEMA)).unwrap();
        let err = validator.validate(&json!({"tags": ["one"]})).unwrap_err();
        match err {
            AuditError::GovernanceViolation { path, reason } => {
                assert_eq!(path, "(root)");
                assert!(reason.contains("name"));
            }
            other => panic!("expected GovernanceViolation, got {other:?}"),
        }
    }

    #[test]
    fn nested_violation_reports_field_path() {
        let dir = tempfile::tempdir().unwrap();
        let validator = SchemaValidator::from_path(write_schema(&dir, TOY_SCHEMA)).unwrap();
        let err = validator
            .validate(&json!({"name": "al", "tags": ["one"]}))
            .unwrap_err();
        match err {
            AuditError::GovernanceViolation { path, .. } => {
                assert!(path.contains("name"), "unexpected path: {path}");
            }
            other => panic!("expected GovernanceViolation, got {other:?}"),
        }
    }

    #[test]
    fn empty_array_violation_reports_min_items() {
        let dir = tempfile::tempdir().unwrap();
        let validator = SchemaValidator::from_path(write_schema(&dir, TOY_SCHEMA)).unwrap();
        let err = validator
            .validate(&json!({"name": "alice", "tags": []}))
            .unwrap_err();
        match err {
            AuditError::GovernanceViolation { path, .. } => {
                assert!(path.contains("tags"), "unexpected path: {path}");
            }
            other => panic!("expected GovernanceViolation, got {other:?}"),
        }
    }
}
