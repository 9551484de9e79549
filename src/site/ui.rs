//! Page handlers: the portfolio at `/` and the glitch page for everything
//! the router does not know.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Datelike;
use tracing::debug;

use super::{SiteState, page};

/// GET /
pub(super) async fn root(State(state): State<SiteState>) -> Html<String> {
    let year = chrono::Local::now().year();
    Html(page::render_page(&state.catalog, state.assistant.fallbacks(), year))
}

/// Anything unrouted.
pub(super) async fn not_found(State(state): State<SiteState>, uri: axum::http::Uri) -> Response {
    debug!(path = %uri.path(), "no route; serving glitch page");
    (
        StatusCode::NOT_FOUND,
        Html(page::render_glitch(&state.catalog.profile.contact)),
    )
        .into_response()
}
