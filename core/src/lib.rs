//! Synchronous core of the homework status notifier.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! homework-status endpoint and the Telegram Bot API without touching the
//! network (host-does-IO pattern). On top of that it validates the
//! homework-status body and renders notification text.
//!
//! # Design
//! - The clients are stateless; they hold only URLs and tokens.
//! - Each remote operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and the agent can swap its transport in tests.
//! - Validation works on `serde_json::Value` so every shape deviation gets a
//!   distinct `ValidationError`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod catalog;
pub mod client;
pub mod error;
pub mod formatter;
pub mod http;
pub mod types;
pub mod validator;

pub use catalog::HomeworkStatus;
pub use client::{
    PracticumClient, TelegramClient, DEFAULT_PRACTICUM_ENDPOINT, DEFAULT_TELEGRAM_API_URL,
};
pub use error::{ApiError, StatusError, ValidationError};
pub use formatter::{format_failure, format_status};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{HomeworkRecord, SendMessage, SentMessage, ValidatedResponse};
pub use validator::{validate_homeworks, validate_response, EmptyHomeworks};
