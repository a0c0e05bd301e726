//! HTTP handlers for all site routes.

pub mod home;
pub mod services;
pub mod pricing;
pub mod faq;
pub mod about;
pub mod contact;
pub mod reviews;
pub mod blog;
pub mod not_found;

use axum::response::Html;
use serde::Serialize;
use webjasa_common::Result;

use crate::state::AppState;

/// Renders a full page inside the site shell.
pub(crate) fn render_page<S: Serialize>(state: &AppState, template: &str, ctx: S) -> Result<Html<String>> {
    state.renderer.render(template, ctx).map(Html)
}
