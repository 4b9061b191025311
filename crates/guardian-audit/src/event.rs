//! Event vocabulary shared by the recorder and its callers.
//!
//! There is deliberately no typed event struct here: the constitutional
//! rules live in the schema document alone, so revising governance never
//! requires touching this crate.

use serde_json::Value;

/// The single event type accepted by the constitutional schema.
pub const EVENT_TYPE: &str = "HARM_OVERRIDE";

/// Field carrying the unique record identifier.
pub const EVENT_ID_FIELD: &str = "event_id";

/// Read a non-empty `event_id` from an event payload, if present.
pub(crate) fn event_id(event: &Value) -> Option<&str> {
    event
        .get(EVENT_ID_FIELD)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

/// Set `event_id` on an event payload. A no-op on non-object payloads,
/// which the schema gate rejects before anything is written.
pub(crate) fn set_event_id(event: &mut Value, id: &str) {
    if let Some(object) = event.as_object_mut() {
        object.insert(EVENT_ID_FIELD.to_string(), Value::String(id.to_string()));
    }
}
