use std::{collections::VecDeque, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const PRACTICUM_TOKEN: &str = "practicum-test-token";
pub const TELEGRAM_TOKEN: &str = "123456:telegram-test-token";
pub const HOMEWORK_PATH: &str = "/api/user_api/homework_statuses/";

/// A canned reply for the next homework-status request.
#[derive(Clone, Debug)]
pub struct ScriptedResponse {
    pub status: u16,
    pub body: String,
}

impl ScriptedResponse {
    pub fn json(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// A message the fake bot accepted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentMessage {
    pub message_id: i64,
    pub chat_id: String,
    pub text: String,
}

#[derive(Deserialize)]
pub struct HomeworkQuery {
    pub from_date: i64,
}

#[derive(Deserialize)]
pub struct SendMessageInput {
    pub chat_id: Value,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct MockState {
    /// Replies handed out in order; once drained the endpoint answers with
    /// an empty list stamped with the requested `from_date`.
    pub homework_responses: VecDeque<ScriptedResponse>,
    pub from_dates: Vec<i64>,
    pub sent_messages: Vec<SentMessage>,
    pub reject_messages: bool,
}

pub type Db = Arc<RwLock<MockState>>;

pub fn new_state() -> Db {
    Arc::new(RwLock::new(MockState::default()))
}

pub fn app() -> Router {
    router(new_state())
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route(HOMEWORK_PATH, get(homework_statuses))
        .route("/{bot}/sendMessage", post(send_message))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, new_state()).await
}

pub async fn serve(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, router(db)).await
}

fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn homework_statuses(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(query): Query<HomeworkQuery>,
) -> Response {
    let expected = format!("OAuth {PRACTICUM_TOKEN}");
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);
    if !authorized {
        let body = json!({
            "code": "not_authenticated",
            "message": "Учетные данные не были предоставлены.",
            "source": "__response__"
        });
        return json_response(StatusCode::UNAUTHORIZED, body.to_string());
    }

    let mut state = db.write().await;
    state.from_dates.push(query.from_date);
    match state.homework_responses.pop_front() {
        Some(scripted) => {
            let status =
                StatusCode::from_u16(scripted.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            json_response(status, scripted.body)
        }
        None => {
            let body = json!({"homeworks": [], "current_date": query.from_date});
            json_response(StatusCode::OK, body.to_string())
        }
    }
}

async fn send_message(
    State(db): State<Db>,
    Path(bot): Path<String>,
    Json(input): Json<SendMessageInput>,
) -> (StatusCode, Json<Value>) {
    if bot.strip_prefix("bot") != Some(TELEGRAM_TOKEN) {
        let body = json!({"ok": false, "error_code": 401, "description": "Unauthorized"});
        return (StatusCode::UNAUTHORIZED, Json(body));
    }

    let mut state = db.write().await;
    if state.reject_messages {
        let body = json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        });
        return (StatusCode::BAD_REQUEST, Json(body));
    }

    let chat_id = match input.chat_id {
        Value::String(id) => id,
        other => other.to_string(),
    };
    let message = SentMessage {
        message_id: state.sent_messages.len() as i64 + 1,
        chat_id,
        text: input.text,
    };
    state.sent_messages.push(message.clone());
    let body = json!({
        "ok": true,
        "result": {"message_id": message.message_id, "text": message.text}
    });
    (StatusCode::OK, Json(body))
}
