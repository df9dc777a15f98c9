//! Shared test helpers: a scripted in-memory transport and a ready config.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use homework_core::{HttpRequest, HttpResponse};
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::TransportError;
use crate::transport::Transport;

pub(crate) const CHAT_ID: &str = "4242";

pub(crate) fn test_config() -> Config {
    Config::from_lookup(|key| {
        let value = match key {
            "PRACTICUM_TOKEN" => "p-token",
            "TELEGRAM_TOKEN" => "t-token",
            "TELEGRAM_CHAT_ID" => CHAT_ID,
            "PRACTICUM_ENDPOINT" => "http://homework.test/api/user_api/homework_statuses/",
            "TELEGRAM_API_URL" => "http://telegram.test",
            _ => return None,
        };
        Some(value.to_string())
    })
    .unwrap()
}

#[derive(Default)]
struct FakeState {
    homework: VecDeque<Result<HttpResponse, String>>,
    telegram_down: bool,
    telegram_rejects: bool,
    requests: Vec<HttpRequest>,
}

/// Transport that answers homework fetches from a script and accepts every
/// `sendMessage` unless told the bot is down or rejecting. Clones share one script.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    inner: Rc<RefCell<FakeState>>,
}

impl FakeTransport {
    pub(crate) fn push_homework(&self, status: u16, body: Value) {
        self.inner
            .borrow_mut()
            .homework
            .push_back(Ok(HttpResponse::new(status, body.to_string())));
    }

    pub(crate) fn push_homework_raw(&self, status: u16, body: &str) {
        self.inner
            .borrow_mut()
            .homework
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub(crate) fn push_connection_error(&self, message: &str) {
        self.inner
            .borrow_mut()
            .homework
            .push_back(Err(message.to_string()));
    }

    pub(crate) fn set_telegram_down(&self) {
        self.inner.borrow_mut().telegram_down = true;
    }

    pub(crate) fn set_telegram_rejecting(&self) {
        self.inner.borrow_mut().telegram_rejects = true;
    }

    pub(crate) fn homework_requests(&self) -> Vec<HttpRequest> {
        self.inner
            .borrow()
            .requests
            .iter()
            .filter(|req| !req.url.ends_with("/sendMessage"))
            .cloned()
            .collect()
    }

    /// Texts of every `sendMessage` attempt, delivered or not.
    pub(crate) fn sent_texts(&self) -> Vec<String> {
        self.inner
            .borrow()
            .requests
            .iter()
            .filter(|req| req.url.ends_with("/sendMessage"))
            .map(|req| {
                let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                body["text"].as_str().unwrap().to_string()
            })
            .collect()
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.inner.borrow_mut();
        state.requests.push(request.clone());

        if request.url.ends_with("/sendMessage") {
            if state.telegram_down {
                return Err(refused("telegram unreachable"));
            }
            if state.telegram_rejects {
                let body = json!({"ok": false, "description": "Bad Request: chat not found"});
                return Ok(HttpResponse::new(400, body.to_string()));
            }
            let message_id = state.requests.len();
            let body = json!({"ok": true, "result": {"message_id": message_id}});
            return Ok(HttpResponse::new(200, body.to_string()));
        }

        match state.homework.pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(refused(&message)),
            None => Err(ureq::Error::Io(io::Error::other("no scripted response")).into()),
        }
    }
}

/// The error ureq reports when nothing is listening.
fn refused(message: &str) -> TransportError {
    ureq::Error::Io(io::Error::new(io::ErrorKind::ConnectionRefused, message)).into()
}
