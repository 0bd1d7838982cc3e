//! Response validation
//!
//! Checks the shape of a review API payload and picks the homework entry
//! that a cycle reports on.

use serde_json::{Map, Value as JsonValue};

use crate::error::{CycleError, CycleResult};

/// Field holding the homework list in a review API payload
pub const HOMEWORKS_FIELD: &str = "homeworks";

/// Normalizes a payload into the object that carries `homeworks`
///
/// The review API normally answers with an object, but some deployments wrap
/// that object into a one-element list. Precondition for the wrapped form:
/// the first list element is the answer object, any further elements are
/// ignored.
///
/// # Errors
/// * [`CycleError::EmptyResponse`] for `null`, `""`, `[]` or `{}`
/// * [`CycleError::BadShape`] when neither form yields an object
pub fn normalize_payload(payload: &JsonValue) -> CycleResult<&Map<String, JsonValue>> {
    match payload {
        JsonValue::Null => Err(CycleError::EmptyResponse),
        JsonValue::String(s) if s.is_empty() => Err(CycleError::EmptyResponse),
        JsonValue::Array(items) => match items.first() {
            None => Err(CycleError::EmptyResponse),
            Some(JsonValue::Object(object)) => Ok(object),
            Some(_) => Err(CycleError::BadShape),
        },
        JsonValue::Object(object) if object.is_empty() => Err(CycleError::EmptyResponse),
        JsonValue::Object(object) => Ok(object),
        _ => Err(CycleError::BadShape),
    }
}

/// Validates a payload and returns its most recent homework entry
///
/// The entry is returned raw; field checks happen during formatting.
pub fn check_response(payload: &JsonValue) -> CycleResult<&JsonValue> {
    let object = normalize_payload(payload)?;

    let homeworks = object
        .get(HOMEWORKS_FIELD)
        .and_then(JsonValue::as_array)
        .ok_or(CycleError::BadShape)?;

    homeworks.first().ok_or(CycleError::EmptyHomeworkList)
}
