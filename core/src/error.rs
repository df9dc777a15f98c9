//! Error types for the homework and messaging clients.
//!
//! # Design
//! Errors are split by the stage that produces them. `ApiError` covers the
//! HTTP envelope (status code, body decoding), `ValidationError` covers the
//! shape of a decoded homework-status body, and `StatusError` covers the
//! domain lookup of a status code. The agent folds all three into its loop
//! error.

use thiserror::Error;

/// Errors returned by the `parse_*` methods of the API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned something other than the expected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body was not valid JSON of the expected form.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The messaging API answered 200 but with `ok: false`.
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Errors produced while validating a homework-status body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("API response is not a JSON object")]
    TypeShape,

    #[error("API response has no `{0}` field")]
    MissingField(&'static str),

    #[error("malformed data in API response: {0}")]
    MalformedData(String),
}

/// Errors produced while turning a record into a notification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),
}
