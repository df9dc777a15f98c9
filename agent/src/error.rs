//! Error types for the polling agent.

use homework_core::{ApiError, StatusError, ValidationError};
use thiserror::Error;

/// The HTTP round-trip itself failed: DNS, connect, TLS, timeout or body read.
#[derive(Debug, Error)]
#[error("transport error: {0}")]
pub struct TransportError(#[from] pub ureq::Error);

/// Anything that can abort a poll cycle.
///
/// Every variant is recoverable: the loop reports it to the chat and retries
/// after the regular interval.
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Status(#[from] StatusError),
}

/// A message did not reach the chat.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Startup configuration problems. These are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
