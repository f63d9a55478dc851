mod catalog;
mod codec;
mod config;
mod engine;
mod error;
mod handlers;
mod server;

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting recommender");

    // Load configuration
    let config = config::Config::from_env()?;

    // Load the track catalog
    tracing::info!("Loading catalog from {}", config.model_dir);
    let catalog = catalog::Catalog::load_from_dir(&config.model_dir).await?;
    tracing::info!(
        "Loaded {} tracks with {}-dimensional features",
        catalog.count(),
        catalog.dim()
    );

    // Start HTTP server
    server::start(config, Arc::new(catalog)).await?;

    Ok(())
}
