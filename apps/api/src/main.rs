mod analytics;
mod config;
mod dataset;
mod errors;
mod feedback;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::dataset::JobTable;
use crate::feedback::relay::{FeedbackSink, FormRelaySink, LogSink};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobPulse API v{}", env!("CARGO_PKG_VERSION"));

    // One-time dataset load; the table stays immutable for the process lifetime
    let dataset = JobTable::from_csv(Path::new(&config.dataset_path))
        .with_context(|| format!("Loading dataset from {}", config.dataset_path))?;
    if dataset.is_empty() {
        warn!("Dataset at {} contains no postings", config.dataset_path);
    }
    info!(
        "Dataset loaded: {} postings across {} years and {} industries",
        dataset.len(),
        dataset.years().len(),
        dataset.industries().len()
    );

    // Pick the feedback sink (relay when configured, log-only otherwise)
    let feedback: Arc<dyn FeedbackSink> = match &config.feedback_relay_url {
        Some(url) => Arc::new(FormRelaySink::new(url.clone())),
        None => {
            warn!("FEEDBACK_RELAY_URL not set; feedback will be logged, not relayed");
            Arc::new(LogSink)
        }
    };

    // Build app state
    let state = AppState {
        dataset: Arc::new(dataset),
        feedback,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the SPA origin in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
