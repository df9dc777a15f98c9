//! Shape checks for the homework-status body.
//!
//! # Design
//! The body is decoded as an untyped `serde_json::Value` first so that each
//! kind of deviation (not an object, missing key, wrong type, empty list) maps
//! to its own `ValidationError` variant. Only after the shape checks pass are
//! the elements deserialized into `HomeworkRecord`.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::types::{HomeworkRecord, ValidatedResponse};

/// What to do with a `homeworks` array that has no entries.
///
/// The upstream service answers with an empty list whenever nothing changed
/// since `from_date`, so `Reject` reports every quiet poll as malformed data.
/// It stays the default; `Accept` treats the empty list as "no updates".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyHomeworks {
    #[default]
    Reject,
    Accept,
}

/// Extract the homework records from a decoded response.
///
/// Fails on a non-object body, a missing `homeworks` key, a `homeworks` value
/// that is not an array or is empty, and on elements that are not records.
pub fn validate_homeworks(response: &Value) -> Result<Vec<HomeworkRecord>, ValidationError> {
    extract_homeworks(response, EmptyHomeworks::Reject)
}

/// Validate the whole body, including the `current_date` cursor.
pub fn validate_response(
    response: &Value,
    policy: EmptyHomeworks,
) -> Result<ValidatedResponse, ValidationError> {
    let homeworks = extract_homeworks(response, policy)?;
    let current_date = match response.get("current_date") {
        None => return Err(ValidationError::MissingField("current_date")),
        Some(value) => value.as_i64().ok_or_else(|| {
            ValidationError::MalformedData(format!("`current_date` is not an integer: {value}"))
        })?,
    };
    Ok(ValidatedResponse {
        homeworks,
        current_date,
    })
}

fn extract_homeworks(
    response: &Value,
    policy: EmptyHomeworks,
) -> Result<Vec<HomeworkRecord>, ValidationError> {
    let object = response.as_object().ok_or(ValidationError::TypeShape)?;
    let homeworks = object
        .get("homeworks")
        .ok_or(ValidationError::MissingField("homeworks"))?;
    let items = homeworks.as_array().ok_or_else(|| {
        ValidationError::MalformedData(format!("`homeworks` is not a list: {homeworks}"))
    })?;
    if items.is_empty() && policy == EmptyHomeworks::Reject {
        return Err(ValidationError::MalformedData("`homeworks` is empty".to_string()));
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            HomeworkRecord::deserialize(item).map_err(|e| {
                ValidationError::MalformedData(format!("homework #{index}: {e}"))
            })
        })
        .collect()
}
