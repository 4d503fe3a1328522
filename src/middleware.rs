//! Request instrumentation.
//!
//! [`instrument`] wraps a single route so that every request it serves is
//! counted and timed exactly once, under a fixed logical endpoint name.
//! [`handle_panic`] sits outside the whole router and turns any fault that
//! escaped a handler into a JSON 500.

use crate::domain::MetricsPtr;
use crate::handlers::ApiError;
use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::MethodRouter,
};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

/// Endpoint label recorded for faults caught at the top level.
const FAULT_ENDPOINT: &str = "500";

/// Response marker for requests already counted as unmatched routes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnmatchedRoute;

/// Per-route middleware state: where to record and under which label.
#[derive(Clone)]
pub(crate) struct RouteMetrics {
    metrics: MetricsPtr,
    endpoint: &'static str,
}

impl RouteMetrics {
    fn record(&self, method: &str, status: u16, start: Instant) {
        // ---
        self.metrics.increment_request(method, self.endpoint, status);
        if status >= 500 {
            self.metrics.increment_error(method, self.endpoint, status);
        }
        self.metrics
            .observe_latency(method, self.endpoint, start.elapsed().as_secs_f64());

        tracing::debug!(method, endpoint = self.endpoint, status, "Recorded request");
    }
}

/// Wraps `route` so each request is recorded under `endpoint`.
///
/// Only the registered methods are wrapped; a wrong verb (405) is not counted.
///
/// The label is the logical route name rather than the request path, so
/// `/api/events/1` and `/api/events/2` share one series.
pub fn instrument<S>(
    metrics: &MetricsPtr,
    endpoint: &'static str,
    route: MethodRouter<S>,
) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    // ---
    let state = RouteMetrics {
        metrics: metrics.clone(),
        endpoint,
    };

    route.route_layer(middleware::from_fn_with_state(state, track_request))
}

/// Records one request count and one latency sample, then hands back the
/// handler's outcome untouched. Responses marked [`UnmatchedRoute`] were
/// already counted and are skipped. A panicking handler is recorded as a 500
/// and the panic continues to unwind.
async fn track_request(
    State(route): State<RouteMetrics>,
    request: Request,
    next: Next,
) -> Response {
    // ---
    let method = request.method().to_string();
    let start = Instant::now();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => {
            if response.extensions().get::<UnmatchedRoute>().is_none() {
                route.record(&method, response.status().as_u16(), start);
            }
            response
        }
        Err(panic) => {
            route.record(&method, 500, start);
            std::panic::resume_unwind(panic)
        }
    }
}

/// Outermost layer: converts an escaped panic into `500 {"error": ...}`.
pub async fn handle_panic(
    State(metrics): State<MetricsPtr>,
    request: Request,
    next: Next,
) -> Response {
    // ---
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            tracing::error!(
                method = %method,
                path = %path,
                "Unhandled fault: {}",
                panic_message(panic.as_ref())
            );
            metrics.increment_request(&method, FAULT_ENDPOINT, 500);
            metrics.increment_error(&method, FAULT_ENDPOINT, 500);

            ApiError::Internal.into_response()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    // ---
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
