//! Presentation shell: the portfolio page, the chat endpoint and the
//! fallback page, served with axum.
//!
//! ## URL layout
//!
//! ```text
//! GET  /              → single page rendered from the content catalog
//! POST /api/chat      → { message } → { reply, html, source }
//! GET  /api/health    → { status, provider, online }
//! GET  /api/content   → profile, projects, skills, services
//! GET  /favicon.ico   → 204
//! *                   → 404 "System Glitch" page
//! ```
//!
//! The server keeps no transcript: the browser widget owns its messages and
//! the single-flight guard, and every `/api/chat` call is independent.

mod api;
pub mod page;
mod ui;

use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::chat::{Assistant, Connectivity};
use crate::content::Catalog;
use crate::error::AppError;

// ── Shared request state ──────────────────────────────────────────────────────

/// Router state injected into every handler. Cheap to clone.
#[derive(Clone)]
pub struct SiteState {
    pub assistant: Arc<Assistant>,
    pub connectivity: Connectivity,
    pub catalog: Catalog,
}

impl SiteState {
    pub fn new(assistant: Arc<Assistant>, connectivity: Connectivity, catalog: Catalog) -> Self {
        Self { assistant, connectivity, catalog }
    }
}

// ── Server loop ───────────────────────────────────────────────────────────────

/// Bind `bind_addr` and serve until `shutdown` fires.
pub async fn serve(
    bind_addr: &str,
    state: SiteState,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    let router = build_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

    let local = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| bind_addr.to_string());
    info!(bind = %local, "site listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Server(format!("server error: {e}")))?;

    info!("site shut down");
    Ok(())
}

// ── Router ────────────────────────────────────────────────────────────────────

pub fn build_router(state: SiteState) -> Router {
    Router::new()
        .route("/api/chat",    post(api::chat))
        .route("/api/health",  get(api::health))
        .route("/api/content", get(api::content))
        .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }))
        .route("/",            get(ui::root))
        .fallback(ui::not_found)
        .with_state(state)
}
