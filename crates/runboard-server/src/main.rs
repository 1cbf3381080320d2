//! Run with:
//!   MONGO_URI=mongodb://localhost:27017 cargo run -p runboard-server

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use runboard_server::telemetry::init_tracing;
use runboard_server::{build_router, AppState, ServerConfig};
use runboard_store::MongoRunRepository;

#[tokio::main]
async fn main() {
    init_tracing();
    let config = ServerConfig::parse();

    if let Err(err) = serve(config).await {
        tracing::error!(error = ?err, "failed to start");
        std::process::exit(1);
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::debug!(?config, "loaded configuration");

    let repository = MongoRunRepository::connect(
        &config.mongo_uri,
        &config.database,
        config.connect_timeout(),
    )
    .await
    .context("connect to mongodb")?;
    repository
        .ensure_indexes()
        .await
        .context("create run indexes")?;

    let app = build_router(AppState::new(Arc::new(repository)));
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    tracing::info!(%addr, "server running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
