//! tint HTTP endpoint.
//!
//! A thin JSON layer over `tint-color`:
//!
//! - `POST /generate` describes one color in every model.
//! - `POST /generate/palette` builds a luminosity ramp from it.
//! - `GET /health` reports liveness.

pub mod api;
pub mod error;
pub mod handlers;
pub mod state;


use std::future::Future;

use axum::routing::{get, post};
use axum::Router;
use tint_common::TintError;
use tint_config::ServerConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::{AppError, AppResult};
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/generate", post(handlers::generate))
        .route("/generate/palette", post(handlers::palette))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<(), TintError> {
    run_with_shutdown(config, shutdown_signal()).await
}

/// Serve until `shutdown` resolves.
pub async fn run_with_shutdown<F>(config: ServerConfig, shutdown: F) -> Result<(), TintError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(&config.server.listen).await?;
    info!("tint-server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(AppState::new(&config)))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("tint-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
