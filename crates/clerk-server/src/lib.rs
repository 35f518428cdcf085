//! Clerk Server
//!
//! HTTP front end that turns a citation into a downloadable PDF brief by
//! running the `clerk` pipeline as a subprocess.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod runner;

use config::ServerConfig;
use handlers::{create_router, AppState};
use runner::ClerkRunner;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the brief HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    info!("Starting Clerk server");
    info!("Pipeline binary: {}", config.clerk_bin.display());
    info!("Working directory: {}", config.work_dir.display());

    let state = AppState {
        runner: Arc::new(ClerkRunner::from_config(&config)),
    };
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
