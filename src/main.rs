//! # chat-host
//!
//! Serves the demo page with the chat widget server-rendered, plus the
//! hydrate bundle built by `cargo leptos`.

mod config;
mod routes;

use config::{ConfigError, HostConfig};
use leptos::config::errors::LeptosConfigError;

/// Fatal startup or serve failure.
#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("leptos configuration: {0}")]
    Leptos(#[from] LeptosConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "chat-host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(
        port = config.port,
        backend_url = config.backend_url.as_deref().unwrap_or("(same origin)"),
        "chat-host listening"
    );
    axum::serve(listener, app).await.map_err(HostError::Serve)
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
