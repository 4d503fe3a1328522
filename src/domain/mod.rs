mod catalog;
mod database;
mod metrics;
mod orders;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Publicly expose the readiness database abstraction
pub use database::{Database, DatabasePtr, ProbeError};

// Mock ticketing models
pub use catalog::{event_detail, featured_events, Event, EventDetail};
pub use orders::{checkout_total, transaction_id, BasketRequest, CheckoutItem, CheckoutRequest};
