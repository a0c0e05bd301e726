//! WebJasa Web Server
//!
//! Run with: cargo run -p webjasa-web

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use webjasa_web::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config_path = Config::path();
    let loaded = Config::load_from(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    let missing = loaded.is_none();
    let config = loaded.unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("Starting {} web server...", config.site.name);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    if missing {
        warn!(path = %config_path.display(), "config file not found, using defaults");
    }

    let addr = config.server.socket_addr()?;
    let state = webjasa_web::state::AppState::new(config)?;
    let app = webjasa_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("🌐 Listening on http://{}", addr);
    info!("   Beranda: http://{}/", addr);
    info!("   FAQ:     http://{}/faq", addr);
    info!("   Kontak:  http://{}/kontak", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
