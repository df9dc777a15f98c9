//! Notification text for a single homework record.

use crate::catalog::HomeworkStatus;
use crate::error::StatusError;
use crate::types::HomeworkRecord;

/// Render the status-change notification for `record`.
pub fn format_status(record: &HomeworkRecord) -> Result<String, StatusError> {
    let status = HomeworkStatus::from_code(&record.status)
        .ok_or_else(|| StatusError::UnknownStatus(record.status.clone()))?;
    Ok(format!(
        "Changed status of homework review \"{}\". {}",
        record.homework_name,
        status.verdict()
    ))
}

/// Render the notification sent when a poll cycle fails.
pub fn format_failure(error: &dyn std::fmt::Display) -> String {
    format!("Bot failure: {error}")
}
