use crate::catalog::Catalog;
use crate::config::Config;
use crate::handlers;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub async fn start(config: Config, catalog: Arc<Catalog>) -> anyhow::Result<()> {
    let app = Router::new()
        .route("/invocations", post(handlers::invocations_handler))
        .route("/recommendations", post(handlers::recommendations_handler))
        .route("/ping", get(handlers::ping_handler))
        .layer(Extension(catalog))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Recommender listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
