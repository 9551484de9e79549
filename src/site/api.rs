//! Handlers for `/api/*` routes.
//!
//! Chat failures are answered with a fallback reply and status 200; only a
//! malformed request is an HTTP error.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::chat::{ReplySource, format_reply, render_html};

use super::SiteState;

// ── Request / response types ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct ChatRequest {
    message: String,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
    html: String,
    /// `model`, `empty` or the failure kind.
    source: String,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a JSON error response body.
fn json_error(code: &str, msg: impl std::fmt::Display) -> Json<serde_json::Value> {
    Json(json!({ "error": code, "message": format!("{msg}") }))
}

fn source_label(source: ReplySource) -> String {
    match source {
        ReplySource::Model => "model".to_string(),
        ReplySource::EmptyFallback => "empty".to_string(),
        ReplySource::Failure(kind) => serde_json::to_value(kind)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| "unavailable".to_string()),
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// POST /api/chat
pub(super) async fn chat(
    State(state): State<SiteState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!(error = %rejection, "chat request rejected");
            return (rejection.status(), json_error("bad_request", rejection.body_text()))
                .into_response();
        }
    };
    let question = req.message.trim();
    if question.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            json_error("empty_message", "message must not be empty"),
        )
            .into_response();
    }

    let reply = state
        .assistant
        .reply(question, state.connectivity.is_online())
        .await;
    debug!(source = ?reply.source, "chat answered");

    let body = ChatResponse {
        html: render_html(&format_reply(&reply.text)),
        source: source_label(reply.source),
        reply: reply.text,
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// GET /api/health
pub(super) async fn health(State(state): State<SiteState>) -> Response {
    let body = json!({
        "status": "ok",
        "provider": state.assistant.provider().name(),
        "online": state.connectivity.is_online(),
        "upstream": state.connectivity.is_upstream_reachable(),
    });
    (StatusCode::OK, Json(body)).into_response()
}

/// GET /api/content
pub(super) async fn content(State(state): State<SiteState>) -> Response {
    (StatusCode::OK, Json(state.catalog)).into_response()
}
