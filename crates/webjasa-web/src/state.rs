//! Shared application state for the web server.

use std::sync::Arc;

use webjasa_common::{InquirySink, LogInquirySink, Result};

use crate::config::Config;
use crate::render::Renderer;

/// Shared state injected into every Axum handler. Read-only after startup.
pub struct AppState {
    pub config: Config,
    pub renderer: Renderer,
    /// Where contact-form submissions are handed off.
    pub inquiries: Arc<dyn InquirySink>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_sink(config, Arc::new(LogInquirySink))
    }

    pub fn with_sink(config: Config, inquiries: Arc<dyn InquirySink>) -> Result<Self> {
        let renderer = Renderer::new(&config.site)?;
        Ok(Self { config, renderer, inquiries })
    }
}

pub type SharedState = Arc<AppState>;
