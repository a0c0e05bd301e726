//! webjasa-web: server-rendered marketing site for WebJasa.
//! Pages:
//!   - Home, services, pricing, about, reviews
//!   - FAQ with a query-driven accordion
//!   - Contact form that acknowledges every submission
//!   - Blog listing, category filter and posts

pub mod config;
pub mod content;
pub mod render;
pub mod router;
pub mod handlers;
pub mod state;
