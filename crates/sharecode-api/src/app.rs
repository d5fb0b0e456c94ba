//! Application bootstrap — wires the registry, sweeper, and router into a
//! running server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use sharecode_core::config::AppConfig;
use sharecode_core::{AppError, AppResult};
use sharecode_registry::{RegistrySweeper, ShareCodeRegistry};

use crate::router::build_router;
use crate::state::AppState;

/// Runs the share-code server with the given configuration.
///
/// Constructs the single registry instance for the process, starts the
/// background sweeper, and serves HTTP until a shutdown signal arrives.
/// On shutdown the sweeper is signaled and awaited within the configured
/// grace period.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting share-code service...");

    // ── Registry & background sweeper ────────────────────────────
    let (registry, removal_rx) = ShareCodeRegistry::new(config.share.expire_seconds);
    let registry = Arc::new(registry);
    tracing::info!(
        ttl_seconds = registry.ttl_seconds(),
        "Share-code registry initialized"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let sweeper = RegistrySweeper::new(
        Arc::clone(&registry),
        Duration::from_secs(config.share.sweep_interval_seconds),
    );
    let sweeper_handle = tokio::spawn(sweeper.run(shutdown_rx, removal_rx));

    // ── HTTP server ──────────────────────────────────────────────
    let state = AppState::new(Arc::new(config.clone()), Arc::clone(&registry));
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Share-code service listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Wait for the sweeper ─────────────────────────────────────
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let _ = tokio::time::timeout(grace, sweeper_handle).await;

    tracing::info!("Share-code service shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
