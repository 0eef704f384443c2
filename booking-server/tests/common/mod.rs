//! Shared helpers for booking-server integration tests

#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use http::{HeaderValue, Request, Response};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use booking_server::AppState;
use booking_server::api::create_router;
use booking_server::config::TelegramConfig;
use booking_server::db::DbService;
use booking_server::notify::Notifier;

pub const ALLOWED_ORIGIN: &str = "https://bistro.example";
pub const BOT_TOKEN: &str = "123:test-token";
pub const CHAT_ID: &str = "873";

pub fn send_message_path() -> String {
    format!("/bot{BOT_TOKEN}/sendMessage")
}

pub fn telegram(api_base: &str, bot_token: Option<&str>, chat_id: Option<&str>) -> TelegramConfig {
    TelegramConfig {
        bot_token: bot_token.map(String::from),
        chat_id: chat_id.map(String::from),
        api_base: api_base.to_string(),
        timeout: Duration::from_millis(500),
    }
}

/// In-memory store plus a notifier; `api_base = None` leaves credentials unset
pub async fn test_state(api_base: Option<&str>) -> AppState {
    let config = match api_base {
        Some(base) => telegram(base, Some(BOT_TOKEN), Some(CHAT_ID)),
        None => telegram("http://127.0.0.1:9", None, None),
    };
    state_with(config).await
}

pub async fn state_with(telegram: TelegramConfig) -> AppState {
    let db = DbService::in_memory().await.expect("in-memory database");
    let notifier = Notifier::new(telegram).expect("http client");
    AppState::from_parts(db, notifier, HeaderValue::from_static(ALLOWED_ORIGIN))
}

pub fn app(state: &AppState) -> Router {
    create_router(state.clone())
}

pub fn sample_booking() -> Value {
    json!({
        "date": "2024-05-01",
        "time": "19:00",
        "guests": 4,
        "occasion": "Birthday",
        "phone": "555-1234",
        "email": "a@b.com"
    })
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn booking_count(state: &AppState) -> i64 {
    booking_server::db::bookings::count_bookings(&state.db.pool)
        .await
        .unwrap()
}
