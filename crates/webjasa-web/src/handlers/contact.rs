//! Contact page and form submission.

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use minijinja::context;
use webjasa_common::{Acknowledgment, ContactField, ContactForm, Result};

use crate::content::contact::{BUDGET_OPTIONS, CONTACT_FAQ, OPENING_HOURS, SERVICE_OPTIONS};
use crate::handlers::render_page;
use crate::state::{AppState, SharedState};

pub async fn contact_page(State(state): State<SharedState>) -> Result<Html<String>> {
    render_contact(&state, &ContactForm::new(), None)
}

/// POST /kontak. Fields are applied in body order; unknown names are dropped.
/// A body that is not a url-encoded form counts as no edits.
pub async fn contact_submit(
    State(state): State<SharedState>,
    body: std::result::Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Html<String>> {
    let pairs = match body {
        Ok(Form(pairs)) => pairs,
        Err(e) => {
            tracing::debug!(error = %e, "unreadable contact form body");
            Vec::new()
        }
    };
    let edits = pairs.into_iter().filter_map(|(name, value)| match name.parse::<ContactField>() {
        Ok(field) => Some((field, value)),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring form field");
            None
        }
    });
    let form = ContactForm::new().apply_edits(edits);
    let ack = form.submit();

    // The visitor is acknowledged whether or not the hand-off worked.
    if let Err(e) = state.inquiries.deliver(&ack.inquiry).await {
        tracing::warn!(inquiry_id = %ack.inquiry.id, error = %e, "failed to deliver inquiry");
    }

    render_contact(&state, &form, Some(&ack))
}

fn render_contact(state: &AppState, form: &ContactForm, ack: Option<&Acknowledgment>) -> Result<Html<String>> {
    let required: Vec<&str> = ContactField::ALL
        .iter()
        .filter(|f| f.is_marked_required())
        .map(|f| f.as_str())
        .collect();

    render_page(state, "contact.html", context! {
        active => "/kontak",
        values => form.values(),
        required,
        ack_message => ack.map(|a| a.message),
        service_options => SERVICE_OPTIONS,
        budget_options => BUDGET_OPTIONS,
        hours => OPENING_HOURS,
        faq => CONTACT_FAQ,
    })
}
