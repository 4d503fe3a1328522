//! Request-scoped basket and checkout payloads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body of `POST /api/basket`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BasketRequest {
    pub event_id: Option<i64>,
    pub quantity: Option<i64>,
}

/// Body of `POST /api/checkout`. A missing `items` list is an empty basket.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Vec<CheckoutItem>,
}

/// One basket line at checkout. Missing fields default to price 0, quantity 1.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutItem {
    #[serde(default)]
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Sum of `price * quantity` over all items.
pub fn checkout_total(items: &[CheckoutItem]) -> f64 {
    // ---
    items
        .iter()
        .map(|item| item.price * item.quantity as f64)
        .sum()
}

/// Mock transaction reference with one-second resolution.
///
/// Two checkouts within the same second share an id.
pub fn transaction_id(now: DateTime<Utc>) -> String {
    // ---
    format!("TXN-{}", now.timestamp())
}
