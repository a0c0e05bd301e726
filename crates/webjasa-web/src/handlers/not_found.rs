//! Themed 404 page.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use minijinja::context;

use crate::handlers::render_page;
use crate::state::{AppState, SharedState};

/// Router fallback for every unmatched path.
pub async fn not_found(State(state): State<SharedState>, uri: Uri) -> Response {
    not_found_page(&state, uri.path())
}

/// 404 response rendered in the site shell. Also used by handlers whose
/// path matched but whose parameter names nothing.
pub fn not_found_page(state: &AppState, path: &str) -> Response {
    tracing::debug!(path, "page not found");
    match render_page(state, "404.html", context! { active => "", path }) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(e) => e.into_response(),
    }
}
