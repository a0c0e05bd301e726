//! Testimonials, case studies and client industries.

use axum::{extract::State, response::Html};
use minijinja::context;
use webjasa_common::Result;

use crate::content::reviews::{CASE_STUDIES, INDUSTRIES, STATS, TESTIMONIALS, VIDEOS};
use crate::handlers::render_page;
use crate::state::SharedState;

pub async fn reviews_page(State(state): State<SharedState>) -> Result<Html<String>> {
    render_page(&state, "reviews.html", context! {
        active => "/review",
        stats => STATS,
        testimonials => TESTIMONIALS,
        case_studies => CASE_STUDIES,
        videos => VIDEOS,
        industries => INDUSTRIES,
    })
}
