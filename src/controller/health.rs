//! Health-check handlers polled by the external uptime monitor.
//!
//! Both handlers perform a single in-memory read of the liveness flag and
//! return immediately. They never wait on the Discord worker, so a request
//! arriving before the gateway handshake simply observes not-ready.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::state::AppState;

static READY_BODY: &str = "Bot is running and ready!";
static NOT_READY_BODY: &str = "Bot is starting up or failed to start...";

/// Body for `GET /keep_alive`.
#[derive(Serialize)]
pub struct KeepAliveDto {
    pub message: &'static str,
}

/// `GET /` - primary health check.
///
/// Answers 200 once the bot's gateway session is established, 503 before the
/// handshake or after the worker has died.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    if state.liveness.is_ready() {
        (StatusCode::OK, READY_BODY)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, NOT_READY_BODY)
    }
}

/// `GET /keep_alive` - JSON health check.
///
/// Ready-dependent like `/` by default. Some monitors only want proof the
/// process answers HTTP at all; `KEEP_ALIVE_ALWAYS_OK` switches this route to
/// unconditional 200 for them.
pub async fn keep_alive(State(state): State<AppState>) -> impl IntoResponse {
    let status = if state.keep_alive_always_ok || state.liveness.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(KeepAliveDto { message: "Alive" }))
}
