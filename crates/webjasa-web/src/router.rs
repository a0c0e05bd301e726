//! Axum router: maps every site path to its handler.

use axum::{routing::get, Router};
use tower_http::{
    services::ServeDir,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    home::home_page,
    services::services_page,
    pricing::pricing_page,
    faq::faq_page,
    about::about_page,
    contact::{contact_page, contact_submit},
    reviews::reviews_page,
    blog::{blog_page, blog_category_page, blog_post_page},
    not_found::not_found,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",          get(home_page))
        .route("/layanan",   get(services_page))
        .route("/harga",     get(pricing_page))
        .route("/faq",       get(faq_page))
        .route("/tentang",   get(about_page))
        .route("/kontak",    get(contact_page).post(contact_submit))
        .route("/review",    get(reviews_page))
        .route("/blog",      get(blog_page))
        .route("/blog/{id}", get(blog_post_page))
        .route("/blog/category/{slug}", get(blog_category_page))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
