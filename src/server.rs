//! HTTP server initialization and runtime setup.
//!
//! Loads content, seeds settings and runs the Axum server until shutdown.

use crate::config::Config;
use crate::infrastructure::persistence::{MemoryAttachmentRepository, MemoryOptionStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared state described by `config`.
///
/// # Errors
///
/// Returns an error if the content snapshot cannot be loaded.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let repository = match config.content_path {
        Some(ref path) => MemoryAttachmentRepository::from_json_file(path)
            .with_context(|| format!("Failed to load content from {}", path.display()))?,
        None => MemoryAttachmentRepository::empty(),
    };

    let (posts, attachments) = repository.counts().await;
    tracing::info!(posts, attachments, "Content loaded");

    let options = MemoryOptionStore::seeded(config.option_seeds());

    Ok(AppState::new(
        Arc::new(repository),
        Arc::new(options),
        config.asset_base_url.clone(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Content loading fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
