//! Stateless request builders and response parsers for both upstream APIs.
//!
//! # Design
//! `PracticumClient` talks to the homework-status endpoint and
//! `TelegramClient` to the Bot API. Neither holds mutable state: each
//! operation is split into a `build_*` method that produces an `HttpRequest`
//! and a `parse_*` method that consumes an `HttpResponse`. The caller executes
//! the round-trip in between.

use std::fmt;

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{BotResponse, SendMessage, SentMessage};

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Client for the homework-status endpoint.
#[derive(Clone)]
pub struct PracticumClient {
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// `endpoint` is used verbatim; the real one ends in a slash and the
    /// server redirects requests without it.
    pub fn new(endpoint: &str, token: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        }
    }

    /// Request every status change that happened at or after `from_date`.
    pub fn build_homework_statuses(&self, from_date: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.endpoint.clone(),
            headers: vec![("authorization".to_string(), format!("OAuth {}", self.token))],
            query: vec![("from_date".to_string(), from_date.to_string())],
            body: None,
        }
    }

    /// Decode a homework-status response into an untyped JSON value.
    ///
    /// Only the envelope is checked here; the body's shape is left to
    /// `validator::validate_response`.
    pub fn parse_homework_statuses(&self, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Client for the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramClient {
    base_url: String,
    token: String,
}

impl TelegramClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    pub fn build_send_message(&self, input: &SendMessage) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/bot{}/sendMessage", self.base_url, self.token),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            query: Vec::new(),
            body: Some(body),
        })
    }

    /// The Bot API reports failures both through the status code and through
    /// `ok: false` with a `description`; either is an error here.
    pub fn parse_send_message(&self, response: HttpResponse) -> Result<SentMessage, ApiError> {
        let envelope: Result<BotResponse, _> = serde_json::from_str(&response.body);
        match envelope {
            Ok(BotResponse { ok: false, description, .. }) => Err(ApiError::Rejected(
                description.unwrap_or_else(|| format!("HTTP {}", response.status)),
            )),
            _ if response.status != 200 => Err(ApiError::HttpError {
                status: response.status,
                body: response.body,
            }),
            Ok(BotResponse { result: Some(sent), .. }) => Ok(sent),
            Ok(_) => Err(ApiError::DeserializationError("missing `result` field".to_string())),
            Err(e) => Err(ApiError::DeserializationError(e.to_string())),
        }
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Map an unexpected status code to `ApiError::HttpError`.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn practicum() -> PracticumClient {
        PracticumClient::new(DEFAULT_PRACTICUM_ENDPOINT, "y0_secret")
    }

    fn telegram() -> TelegramClient {
        TelegramClient::new("http://localhost:3000/", "123:ABC")
    }

    #[test]
    fn build_homework_statuses_produces_correct_request() {
        let req = practicum().build_homework_statuses(1_700_000_000);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, DEFAULT_PRACTICUM_ENDPOINT);
        assert_eq!(req.header("Authorization"), Some("OAuth y0_secret"));
        assert_eq!(
            req.query,
            vec![("from_date".to_string(), "1700000000".to_string())]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_homework_statuses_success() {
        let response = HttpResponse::new(200, r#"{"homeworks":[],"current_date":1000}"#);
        let body = practicum().parse_homework_statuses(response).unwrap();
        assert_eq!(body["current_date"], 1000);
    }

    #[test]
    fn parse_homework_statuses_wrong_status() {
        let response = HttpResponse::new(503, "maintenance");
        let err = practicum().parse_homework_statuses(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 503, .. }));
        assert_eq!(err.to_string(), "HTTP 503: maintenance");
    }

    #[test]
    fn parse_homework_statuses_bad_json() {
        let response = HttpResponse::new(200, "<html>");
        let err = practicum().parse_homework_statuses(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn debug_output_hides_tokens() {
        let rendered = format!("{:?} {:?}", practicum(), telegram());
        assert!(!rendered.contains("y0_secret"));
        assert!(!rendered.contains("123:ABC"));
    }

    #[test]
    fn build_send_message_produces_correct_request() {
        let input = SendMessage {
            chat_id: "-1001".to_string(),
            text: "hello".to_string(),
        };
        let req = telegram().build_send_message(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/bot123:ABC/sendMessage");
        assert_eq!(req.header("content-type"), Some("application/json"));
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["chat_id"], "-1001");
        assert_eq!(body["text"], "hello");
    }

    #[test]
    fn parse_send_message_success() {
        let response =
            HttpResponse::new(200, r#"{"ok":true,"result":{"message_id":42,"text":"hi"}}"#);
        let sent = telegram().parse_send_message(response).unwrap();
        assert_eq!(sent.message_id, 42);
    }

    #[test]
    fn parse_send_message_rejected() {
        let response = HttpResponse::new(
            400,
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        );
        let err = telegram().parse_send_message(response).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(ref d) if d == "Bad Request: chat not found"));
    }

    #[test]
    fn parse_send_message_plain_server_error() {
        let response = HttpResponse::new(502, "Bad Gateway");
        let err = telegram().parse_send_message(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 502, .. }));
    }

    #[test]
    fn parse_send_message_without_result() {
        let response = HttpResponse::new(200, r#"{"ok":true}"#);
        let err = telegram().parse_send_message(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
