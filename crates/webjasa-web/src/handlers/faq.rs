//! FAQ page with a server-side accordion.
//!
//! The open item travels in the `open` query parameter. Every question links
//! to the state its click would produce, so the page works without scripts.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use minijinja::{context, Value};
use serde::Deserialize;
use webjasa_common::{faq::item_index, Accordion, Result};

use crate::content::faq::{item_indices, CATEGORIES, TIPS};
use crate::handlers::render_page;
use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct FaqQuery {
    pub open: Option<String>,
}

/// Link target for a click on item `index`.
pub fn toggle_href(accordion: &Accordion, index: usize) -> String {
    match accordion.next_for(index) {
        Some(next) => format!("/faq?open={next}#faq-{index}"),
        None => format!("/faq#faq-{index}"),
    }
}

/// A query string that does not decode (a repeated `open`, say) reads as
/// no query at all.
pub fn lenient_query(query: std::result::Result<Query<FaqQuery>, QueryRejection>) -> FaqQuery {
    match query {
        Ok(Query(query)) => query,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring undecodable FAQ query");
            FaqQuery::default()
        }
    }
}

pub async fn faq_page(
    State(state): State<SharedState>,
    query: std::result::Result<Query<FaqQuery>, QueryRejection>,
) -> Result<Html<String>> {
    let query = lenient_query(query);
    let accordion = Accordion::from_query(query.open.as_deref()).restrict_to(item_indices());
    if query.open.is_some() && accordion.open().is_none() {
        tracing::debug!(open = ?query.open, "ignoring unknown FAQ item");
    }

    let categories: Vec<Value> = CATEGORIES
        .iter()
        .enumerate()
        .map(|(c, category)| {
            let questions: Vec<Value> = category
                .questions
                .iter()
                .enumerate()
                .map(|(q, qa)| {
                    let index = item_index(c, q);
                    context! {
                        index,
                        question => qa.question,
                        answer => qa.answer,
                        is_open => accordion.is_open(index),
                        href => Value::from_safe_string(toggle_href(&accordion, index)),
                    }
                })
                .collect();
            context! { title => category.title, questions }
        })
        .collect();

    render_page(&state, "faq.html", context! {
        active => "/faq",
        open => accordion.open(),
        categories,
        tips => TIPS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_href_opens_other_item() {
        let acc = Accordion::with_open(3);
        assert_eq!(toggle_href(&acc, 101), "/faq?open=101#faq-101");
    }

    #[test]
    fn test_toggle_href_closes_open_item() {
        let acc = Accordion::with_open(3);
        assert_eq!(toggle_href(&acc, 3), "/faq#faq-3");
    }
}
