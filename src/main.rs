//! Scooter Support Server - Binary Entry Point
//!
//! Serves the support chat engine over HTTP.

use std::sync::Arc;

use scooter_support::api::{create_router, AppState};
use scooter_support::config::SupportConfig;
use scooter_support::logging::init_tracing;
use scooter_support::store::JsonlStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SupportConfig::from_env()?;
    init_tracing(&config.log_filter, config.log_json);

    let store = Arc::new(JsonlStore::open(config.data_file.clone())?);
    let state = Arc::new(AppState::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    tracing::info!(
        addr = %config.http_addr,
        data_file = %config.data_file.display(),
        "support server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("support server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
