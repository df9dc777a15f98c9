//! Domain DTOs for the homework and messaging APIs.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//! `HomeworkRecord::status` stays a plain string: an unrecognised status is a
//! formatting error, not a decoding error.

use serde::{Deserialize, Serialize};

/// One entry of the `homeworks` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<String>,
}

impl HomeworkRecord {
    pub fn new(homework_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: homework_name.into(),
            status: status.into(),
            id: None,
            lesson_name: None,
            reviewer_comment: None,
            date_updated: None,
        }
    }
}

/// A homework-status body that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedResponse {
    pub homeworks: Vec<HomeworkRecord>,
    pub current_date: i64,
}

/// Request payload for the messaging API's `sendMessage` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
}

/// Envelope every messaging API response is wrapped in.
#[derive(Debug, Clone, Deserialize)]
pub struct BotResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub result: Option<SentMessage>,
}

/// The subset of a delivered message the notifier cares about.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SentMessage {
    pub message_id: i64,
}
