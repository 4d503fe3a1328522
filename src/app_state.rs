//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` holds the
//! process-wide metrics registry and the optional database used by the
//! readiness probe.
//!
//! The state is cheaply cloneable (both members are `Arc`s) so it can be
//! handed to each request without copying any resources.

use crate::domain::{DatabasePtr, MetricsPtr};

/// Shared application state passed to all Axum handlers.
///
/// This struct serves as the Dependency Injection container for the application.
///
/// # Lifecycle
///
/// 1. Created once at startup (or once per test)
/// 2. Attached to the Axum router by [`crate::build_router`]
/// 3. Cloned automatically by Axum for each incoming HTTP request
/// 4. Handlers extract via `State(state): State<AppState>`
#[derive(Clone)]
pub struct AppState {
    /// Metrics registry shared by every handler and middleware layer.
    ///
    /// Either Prometheus-backed (production) or no-op.
    metrics: MetricsPtr,

    /// Database probed by `/readiness`.
    ///
    /// `None` when no `DATABASE_URL` is configured; readiness then
    /// reports "not ready" without attempting a connection.
    database: Option<DatabasePtr>,
}

impl AppState {
    // ---

    pub fn new(metrics: MetricsPtr, database: Option<DatabasePtr>) -> Self {
        // ---
        AppState { metrics, database }
    }

    /// Get a reference to the metrics implementation.
    pub fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }

    /// Get the readiness database, if one is configured.
    pub(crate) fn database(&self) -> Option<&DatabasePtr> {
        // ---
        self.database.as_ref()
    }
}
