//! # csim-api: Binary Entry Point
//!
//! Starts the Axum HTTP server. Configuration comes from `PORT` and
//! `RUST_LOG`.

use anyhow::Context;
use csim_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;
    let port = config.port;

    let app = csim_api::app(AppState::with_config(config));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("csim-api listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
