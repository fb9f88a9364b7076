//! # Solar API
//!
//! HTTP service behind the storefront's solar calculator widget.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Solar API Routes                                │
//! │                                                                         │
//! │  ┌────────────────────────┐  ┌────────────────────────┐  ┌───────────┐ │
//! │  │  Calculator            │  │  Leads                 │  │  Health   │ │
//! │  │                        │  │                        │  │           │ │
//! │  │ • POST /api/calculator │  │ • POST /api/leads      │  │ • GET     │ │
//! │  │ • GET  /api/calculator │  │ • GET  /api/leads/{id} │  │  /healthz │ │
//! │  └───────────┬────────────┘  └───────────┬────────────┘  └───────────┘ │
//! │              │                           │                              │
//! │  ┌───────────▼───────────────────────────▼──────────────────────────┐  │
//! │  │  AppState                                                         │  │
//! │  │  ┌──────────────────┐  ┌──────────────────┐  ┌─────────────────┐ │  │
//! │  │  │ SolarCalculator  │  │  LeadInbox       │  │  ApiConfig      │ │  │
//! │  │  │ (solar-core)     │  │  RwLock<Vec>     │  │  env vars       │ │  │
//! │  │  └──────────────────┘  └──────────────────┘  └─────────────────┘ │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `SOLAR_API_HOST` - Interface to bind (default: 0.0.0.0)
//! - `SOLAR_API_PORT` - HTTP port (default: 3000)
//! - `SOLAR_API_MAX_BODY_BYTES` - Request body cap (default: 16384)
//! - `SOLAR_API_MAX_LEADS` - Leads kept in memory, oldest evicted first (default: 10000)
//! - `SOLAR_API_LOG` - Log filter, overrides `RUST_LOG`

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use state::{AppState, LeadInbox};

/// Builds the HTTP router with every endpoint mounted.
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/healthz", get(routes::health::healthz_handler))
        .route(
            "/api/calculator",
            get(routes::calculator::describe_handler).post(routes::calculator::calculate_handler),
        )
        .route("/api/leads", post(routes::leads::submit_lead_handler))
        .route("/api/leads/{id}", get(routes::leads::get_lead_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
