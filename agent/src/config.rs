//! Runtime configuration read from the environment.
//!
//! `Config` is built once in `main` and handed to the poller by reference.
//! `from_lookup` takes the variable source as a closure so tests never touch
//! the process environment.

use std::fmt;
use std::time::Duration;

use homework_core::{EmptyHomeworks, DEFAULT_PRACTICUM_ENDPOINT, DEFAULT_TELEGRAM_API_URL};

use crate::error::ConfigError;

pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(600);

const REQUIRED: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub practicum_endpoint: String,
    pub telegram_api_url: String,
    pub retry_interval: Duration,
    pub empty_homeworks: EmptyHomeworks,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from `lookup`. Blank values count as absent, and every
    /// missing required variable is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let missing: Vec<&'static str> = REQUIRED
            .into_iter()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }
        let [practicum_token, telegram_token, telegram_chat_id] =
            REQUIRED.map(|key| get(key).unwrap_or_default());

        let retry_interval = match get("RETRY_INTERVAL_SECS") {
            None => DEFAULT_RETRY_INTERVAL,
            // The loop must wait between cycles, so zero is refused.
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "RETRY_INTERVAL_SECS",
                        value,
                    })
                }
            },
        };

        let empty_homeworks = match get("ACCEPT_EMPTY_HOMEWORKS") {
            None => EmptyHomeworks::Reject,
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => EmptyHomeworks::Accept,
                "false" | "0" | "no" => EmptyHomeworks::Reject,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "ACCEPT_EMPTY_HOMEWORKS",
                        value,
                    })
                }
            },
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint: get("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_interval,
            empty_homeworks,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_interval", &self.retry_interval)
            .field("empty_homeworks", &self.empty_homeworks)
            .finish()
    }
}
