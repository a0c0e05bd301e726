//! Services listing.

use axum::{extract::State, response::Html};
use minijinja::context;
use webjasa_common::Result;

use crate::content::services::{PROCESS, SERVICES, TECHNOLOGIES};
use crate::handlers::render_page;
use crate::state::SharedState;

pub async fn services_page(State(state): State<SharedState>) -> Result<Html<String>> {
    let services: Vec<_> = SERVICES
        .iter()
        .map(|s| context! {
            title => s.title,
            description => s.description,
            icon => s.icon,
            price => s.price,
            key_features => s.key_features(),
            includes => s.includes,
        })
        .collect();

    render_page(&state, "services.html", context! {
        active => "/layanan",
        services,
        process => PROCESS,
        technologies => TECHNOLOGIES,
    })
}
