// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod errors;
mod events;
mod health;
mod metrics;
mod orders;
mod shared_types;

// Operational handlers
pub use health::{health_check, readiness};
pub use metrics::metrics_handler;

// Mock ticketing handlers
pub use events::{get_event, list_events};
pub use orders::{add_to_basket, checkout};

// Error handling
pub use errors::not_found;
pub use shared_types::ApiError;
