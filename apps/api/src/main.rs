mod analysis;
mod config;
mod errors;
mod layout;
mod routes;
mod state;
mod words;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::words::Dictionary;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting wordgrid API v{}", env!("CARGO_PKG_VERSION"));

    let dictionary = Dictionary::load(config.dictionary_path.as_deref())?;
    info!(
        "Reference dictionary ready ({} words, {})",
        dictionary.len(),
        if config.dictionary_path.is_some() { "file" } else { "built-in" }
    );
    if dictionary.is_empty() {
        warn!("Reference dictionary is empty; suggestions will always be empty");
    }
    info!("Grid size {0}x{0}, max {1} words per list", config.grid_size, config.max_words);

    let state = AppState::new(config.clone(), dictionary);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
