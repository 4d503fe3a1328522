// src/lib.rs
use anyhow::Result;
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use handlers::{
    add_to_basket, checkout, get_event, health_check, list_events, metrics_handler, not_found,
    readiness,
};
use middleware::{handle_panic, instrument};

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod middleware;

// Hoist up only the public symbol(s)
pub use app_state::AppState;

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_noop_metrics, // ---
    create_postgres_database,
    create_prom_metrics,
};

/// Build the HTTP router with configuration read from environment variables.
pub fn create_router() -> Result<Router> {
    // ---
    let config = AppConfig::from_env()?;

    create_router_with_config(&config)
}

/// Build the HTTP router from an explicit configuration.
///
/// Must be called from within a Tokio runtime (the database pool is lazy
/// but registers its maintenance task on creation).
pub fn create_router_with_config(config: &AppConfig) -> Result<Router> {
    // ---
    let metrics = match config.metrics.backend {
        MetricsBackend::Prometheus => create_prom_metrics()?,
        MetricsBackend::Noop => create_noop_metrics()?,
    };

    // A bad DATABASE_URL leaves the service up and not ready.
    let database = create_postgres_database(&config.database).unwrap_or_else(|err| {
        tracing::error!("Ignoring database configuration: {err:#}");
        None
    });

    Ok(build_router(AppState::new(metrics, database)))
}

/// Wire every route around an already-built [`AppState`].
///
/// Only the `/api` routes are instrumented per request; unmatched paths are
/// counted by the fallback and escaped panics by the outermost layer.
pub fn build_router(app_state: AppState) -> Router {
    // ---
    let metrics = app_state.metrics().clone();

    let api = Router::new()
        .route("/events", instrument(&metrics, "get_events", get(list_events)))
        .route(
            "/events/{event_id}",
            instrument(&metrics, "get_event", get(get_event)),
        )
        .route(
            "/basket",
            instrument(&metrics, "add_to_basket", post(add_to_basket)),
        )
        .route("/checkout", instrument(&metrics, "checkout", post(checkout)));

    Router::new()
        .route("/healthz", get(health_check))
        .route("/readiness", get(readiness))
        .route("/metrics", get(metrics_handler))
        .nest("/api", api)
        .fallback(not_found)
        .layer(from_fn_with_state(metrics, handle_panic))
        .with_state(app_state)
}
