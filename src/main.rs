//! Arith Cache - arithmetic API backed by an in-process result cache

use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::sync::oneshot;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arith_cache::{api::create_router, AppState, Config, InMemoryStore};

/// Main entry point for the arithmetic API server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the result store with configured parameters
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured address
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arith_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Arith Cache server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: host={}, port={}, cache_size={}, cache_ttl={:?}, shutdown_timeout={:?}",
        config.host, config.server_port, config.cache_size, config.cache_ttl, config.shutdown_timeout
    );

    // The store outlives the router so its stats can be reported on exit
    let store = Arc::new(InMemoryStore::from_config(&config));
    let state = AppState::new(store.clone());
    info!("Result cache initialized");

    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server listening on http://{}", addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = shutdown_rx.await;
    });
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server => {
            result.context("server task panicked")?.context("serving requests")?;
        }
        _ = shutdown_signal() => {
            let _ = shutdown_tx.send(());
            match tokio::time::timeout(config.shutdown_timeout, &mut server).await {
                Ok(result) => {
                    result.context("server task panicked")?.context("serving requests")?;
                }
                Err(_) => {
                    warn!(
                        "Graceful shutdown did not complete in {:?}, dropping open connections",
                        config.shutdown_timeout
                    );
                    server.abort();
                }
            }
        }
    }

    let stats = store.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        expirations = stats.expirations,
        evictions = stats.evictions,
        entries = stats.total_entries,
        "Server shutdown complete"
    );

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
