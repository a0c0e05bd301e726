use axum::{extract::State, response::Html};
use minijinja::context;
use webjasa_common::Result;

use crate::content::about::{AWARDS, MISSION, STATS, STORY, TEAM, VALUES, VISION};
use crate::handlers::render_page;
use crate::state::SharedState;

pub async fn about_page(State(state): State<SharedState>) -> Result<Html<String>> {
    render_page(&state, "about.html", context! {
        active => "/tentang",
        story => STORY,
        stats => STATS,
        vision => VISION,
        mission => MISSION,
        values => VALUES,
        team => TEAM,
        awards => AWARDS,
    })
}
