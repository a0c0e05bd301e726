//! Landing page.

use axum::{extract::State, response::Html};
use minijinja::context;
use webjasa_common::Result;

use crate::content::home::{HERO_POINTS, REASONS, SERVICES, STATS, TESTIMONIALS};
use crate::handlers::render_page;
use crate::state::SharedState;

pub async fn home_page(State(state): State<SharedState>) -> Result<Html<String>> {
    render_page(&state, "home.html", context! {
        active => "/",
        hero_points => HERO_POINTS,
        stats => STATS,
        services => SERVICES,
        reasons => REASONS,
        testimonials => TESTIMONIALS,
    })
}
