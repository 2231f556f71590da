mod config;

use std::sync::Arc;

use axum::ServiceExt;
use axum::extract::Request;
use giggle_api::{AppStateInner, DelayRange};
use giggle_store::{JsonFileStore, SubmissionRepository};
use tracing::info;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "giggle=debug,giggle_api=debug,giggle_store=debug,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;

    let store = JsonFileStore::open(&config.data_file).await?;
    let state = AppStateInner::new(
        SubmissionRepository::new(Arc::new(store)),
        DelayRange::from_millis(config.delay_min_ms, config.delay_max_ms),
    );

    let app = giggle_api::app(state);

    let addr = config.addr()?;
    info!("Giggle server listening on {}", addr);
    info!("Submissions stored in {}", config.data_file.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => tokio::select! {
                _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
            },
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
