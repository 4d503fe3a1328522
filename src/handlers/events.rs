use crate::app_state::AppState;
use crate::domain::{event_detail, featured_events, Event, EventDetail};
use crate::handlers::errors::unmatched_route;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Method,
    response::Response,
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct EventList {
    events: Vec<Event>,
    count: usize,
}

/// Handler for listing events on sale (GET /api/events).
#[tracing::instrument]
pub async fn list_events() -> Json<EventList> {
    // ---
    let events = featured_events();
    let count = events.len();

    Json(EventList { events, count })
}

/// Handler for a single event (GET /api/events/{event_id}).
///
/// Any integer id yields a synthesized event. A segment that is not an
/// integer does not match the route: it is answered and counted exactly
/// like an unknown path.
#[tracing::instrument(skip(state, event_id))]
pub async fn get_event(
    State(state): State<AppState>,
    method: Method,
    event_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<EventDetail>, Response> {
    // ---
    let Path(event_id) = event_id.map_err(|rejection| {
        tracing::debug!("Rejected event id: {rejection}");
        unmatched_route(&state, &method)
    })?;

    Ok(Json(event_detail(event_id)))
}
