//! Status formatting
//!
//! Turns a raw homework entry into a [`HomeworkRecord`] and its
//! notification text.

use serde_json::Value as JsonValue;

use crate::domain::homework::{HomeworkRecord, HomeworkStatus};
use crate::error::{CycleError, CycleResult};

pub const STATUS_FIELD: &str = "status";
pub const NAME_FIELD: &str = "homework_name";

/// Longest status text carried into an error, in characters
const MAX_STATUS_PREVIEW: usize = 64;

/// Extracts a typed record from a raw homework entry
///
/// Field presence is checked before the status value, `status` first.
pub fn parse_status(homework: &JsonValue) -> CycleResult<HomeworkRecord> {
    let status = homework
        .get(STATUS_FIELD)
        .ok_or(CycleError::MissingField(STATUS_FIELD))?;
    let name = homework
        .get(NAME_FIELD)
        .ok_or(CycleError::MissingField(NAME_FIELD))?;

    let status = match status {
        JsonValue::String(s) => s
            .parse::<HomeworkStatus>()
            .map_err(|raw| CycleError::UnknownStatus(preview(&raw)))?,
        other => return Err(CycleError::UnknownStatus(describe(other))),
    };

    // Non-string names are rendered as JSON rather than rejected
    let name = match name {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    };

    Ok(HomeworkRecord::new(name, status))
}

/// Short rendering of a non-string status value
fn describe(value: &JsonValue) -> String {
    match value {
        JsonValue::Array(items) => format!("<array of {}>", items.len()),
        JsonValue::Object(fields) => format!("<object with {} fields>", fields.len()),
        scalar => preview(&scalar.to_string()),
    }
}

/// Cuts `text` to [`MAX_STATUS_PREVIEW`] characters
fn preview(text: &str) -> String {
    if text.chars().count() <= MAX_STATUS_PREVIEW {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_STATUS_PREVIEW).collect();
    cut.push('…');
    cut
}

/// Builds the notification text for a raw homework entry
pub fn format_status(homework: &JsonValue) -> CycleResult<String> {
    parse_status(homework).map(|record| record.message())
}
