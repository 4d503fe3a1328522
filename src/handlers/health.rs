use crate::app_state::AppState;
use crate::domain::ProbeError;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    status: &'static str,
    database: String,
}

/// Liveness probe.
///
/// Always answers `200 {"status": "healthy"}` while the process can serve
/// HTTP; dependency health is deliberately not consulted.
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    // ---
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}

/// Readiness probe.
///
/// Runs one bounded `SELECT 1` against the configured database.
///
/// # Responses
/// - `200 OK` with `{"status": "ready", "database": "connected"}` when the probe succeeds.
/// - `503 SERVICE UNAVAILABLE` with `{"status": "not ready", "database": "no connection"}`
///   when no database is configured or no connection could be made.
/// - `503 SERVICE UNAVAILABLE` with the query error as `database` when `SELECT 1` fails.
#[tracing::instrument(skip(state))]
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    // ---
    let Some(database) = state.database() else {
        return not_ready("no connection".to_string());
    };

    let outcome = database.ping().await;
    state.metrics().set_db_connections(database.active_connections());

    match outcome {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready",
                database: "connected".to_string(),
            }),
        ),
        Err(ProbeError::Unreachable(reason)) => {
            tracing::warn!("Readiness probe could not connect: {reason}");
            not_ready("no connection".to_string())
        }
        Err(err) => {
            tracing::warn!("Readiness probe failed: {err}");
            not_ready(err.to_string())
        }
    }
}

fn not_ready(reason: String) -> (StatusCode, Json<ReadinessResponse>) {
    // ---
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ReadinessResponse {
            status: "not ready",
            database: reason,
        }),
    )
}
