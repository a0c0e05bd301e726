//! Pricing plans, custom development and add-ons.

use axum::{extract::State, response::Html};
use minijinja::context;
use webjasa_common::Result;

use crate::content::pricing::{ADD_ONS, CUSTOM_CAPABILITIES, CUSTOM_PROCESS, PLANS, PRICING_FAQ};
use crate::handlers::render_page;
use crate::state::SharedState;

pub async fn pricing_page(State(state): State<SharedState>) -> Result<Html<String>> {
    render_page(&state, "pricing.html", context! {
        active => "/harga",
        plans => PLANS,
        custom_capabilities => CUSTOM_CAPABILITIES,
        custom_process => CUSTOM_PROCESS,
        add_ons => ADD_ONS,
        faq => PRICING_FAQ,
    })
}
