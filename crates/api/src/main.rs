//! ProfileGate - authorized profile view/update service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use profilegate_api::{router, AppContext};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration; report the outcome once logging is up
    let dotenv = dotenvy::dotenv();

    let config = profilegate_infra::config::load().context("failed to load configuration")?;
    profilegate_infra::init_tracing(&config.logging).context("failed to initialise tracing")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => debug!(error = %e, "no .env file loaded"),
    }

    let bind_addr = config.server.bind_addr.clone();
    let ctx = AppContext::new(config).await.context("failed to initialise application context")?;
    let ctx = Arc::new(ctx);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "ProfileGate listening");

    axum::serve(listener, router(ctx)).with_graceful_shutdown(shutdown_signal()).await?;

    info!("ProfileGate stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
