//! # Solar API
//!
//! HTTP server for the storefront's solar calculator.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Solar API Server                                 │
//! │                                                                         │
//! │  Storefront ───► HTTP (3000) ───► Routes ───► solar-core               │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                                  Lead inbox                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use solar_api::config::DEFAULT_LOG_FILTER;
use solar_api::{build_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first so SOLAR_API_LOG can steer logging
    let config = ApiConfig::load()?;

    init_tracing(config.log_filter.as_deref());

    info!("Starting Solar API server...");
    info!(
        addr = %config.bind_address(),
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    let addr = config.bind_address();
    let app = build_router(AppState::new(config));

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `SOLAR_API_LOG=debug` - Overrides everything else
/// - `RUST_LOG=solar=trace` - Show trace for solar crates only
/// - Default: `info,solar=debug`
fn init_tracing(override_filter: Option<&str>) {
    let filter = match override_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(?e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(?e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
