mod config;
mod errors;
mod llm_client;
mod puzzle;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::puzzle::word_source::LlmWordSource;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Word Search API v{}", env!("CARGO_PKG_VERSION"));

    let puzzle = config.puzzle_config()?;
    info!(
        "Puzzle config: {}x{} grid, {} words, {} trials per word",
        puzzle.grid_size, puzzle.grid_size, puzzle.word_count, puzzle.max_trials
    );

    // Initialize LLM client
    let llm = LlmClient::new(config.llm_api_key.clone(), config.llm_api_url.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        word_source: Arc::new(LlmWordSource::new(llm, puzzle.grid_size)),
        puzzle: Arc::new(puzzle),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
