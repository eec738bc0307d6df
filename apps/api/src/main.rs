mod config;
mod errors;
mod job;
mod letter;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, GenerationMode};
use crate::letter::writer::{CoverLetterWriter, LlmCoverLetterWriter, TemplateCoverLetterWriter};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting coverline v{}", env!("CARGO_PKG_VERSION"));

    let writer = build_writer(&config)?;
    info!("Cover letter mode: {:?}", config.cover_letter_mode);

    let state = AppState { writer };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the cover letter backend for the configured mode.
fn build_writer(config: &Config) -> Result<Arc<dyn CoverLetterWriter>> {
    match (config.cover_letter_mode, &config.anthropic_api_key) {
        (GenerationMode::Llm, Some(api_key)) => {
            let llm =
                LlmClient::new(api_key.clone()).context("Failed to build the LLM HTTP client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(Arc::new(LlmCoverLetterWriter::new(llm)))
        }
        (GenerationMode::Llm, None) => {
            anyhow::bail!("COVER_LETTER_MODE=llm requires ANTHROPIC_API_KEY to be set")
        }
        (GenerationMode::Template, _) => Ok(Arc::new(TemplateCoverLetterWriter)),
    }
}
