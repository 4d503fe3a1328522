use crate::domain::{checkout_total, transaction_id, BasketRequest, CheckoutRequest};
use crate::handlers::shared_types::ApiError;
use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
pub struct BasketResponse {
    message: &'static str,
    event_id: i64,
    quantity: i64,
}

#[derive(Serialize)]
pub struct CheckoutResponse {
    message: &'static str,
    total: f64,
    transaction_id: String,
}

fn bad_body(rejection: JsonRejection) -> ApiError {
    // ---
    ApiError::BadRequest(rejection.body_text())
}

/// Handler for adding an event to the basket (POST /api/basket).
///
/// Nothing is stored; the accepted line is echoed back.
///
/// - `event_id` is required and non-zero, otherwise `400 Bad Request`.
/// - `quantity` defaults to 1.
/// - On success, responds with `201 Created`.
#[tracing::instrument(skip(body))]
pub async fn add_to_basket(
    body: Result<Json<BasketRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BasketResponse>), ApiError> {
    // ---
    let Json(request) = body.map_err(bad_body)?;
    let event_id = request
        .event_id
        .filter(|id| *id != 0)
        .ok_or_else(|| ApiError::BadRequest("event_id required".to_string()))?;
    let quantity = request.quantity.unwrap_or(1);

    info!(event_id, quantity, "Added to basket");

    Ok((
        StatusCode::CREATED,
        Json(BasketResponse {
            message: "Added to basket",
            event_id,
            quantity,
        }),
    ))
}

/// Handler for the mock checkout (POST /api/checkout).
///
/// Totals `price * quantity` over the submitted items and issues a
/// `TXN-<epoch seconds>` reference. Ids are not unique within one second.
#[tracing::instrument(skip(body))]
pub async fn checkout(
    body: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    // ---
    let Json(request) = body.map_err(bad_body)?;
    let total = checkout_total(&request.items);
    let transaction_id = transaction_id(chrono::Utc::now());

    info!(items = request.items.len(), total, %transaction_id, "Checkout completed");

    Ok(Json(CheckoutResponse {
        message: "Checkout successful (mock)",
        total,
        transaction_id,
    }))
}
