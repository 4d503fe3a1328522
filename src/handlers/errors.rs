use crate::app_state::AppState;
use crate::handlers::shared_types::ApiError;
use crate::middleware::UnmatchedRoute;
use axum::{
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
};

/// Endpoint label used for requests that matched no route.
const NOT_FOUND_ENDPOINT: &str = "404";

/// Counts an unmatched request under `"404"` and builds the JSON 404.
///
/// The response carries [`UnmatchedRoute`] so per-route instrumentation
/// does not count it a second time.
pub(crate) fn unmatched_route(state: &AppState, method: &Method) -> Response {
    // ---
    state
        .metrics()
        .increment_request(method.as_str(), NOT_FOUND_ENDPOINT, 404);

    let mut response = ApiError::NotFound.into_response();
    response.extensions_mut().insert(UnmatchedRoute);
    response
}

/// Router fallback for unmatched paths.
pub async fn not_found(State(state): State<AppState>, method: Method) -> Response {
    // ---
    unmatched_route(&state, &method)
}
