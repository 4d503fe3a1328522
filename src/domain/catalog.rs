//! Hardcoded event catalog.
//!
//! Events are rebuilt on every call and never stored or mutated.

use serde::Serialize;

/// An event as listed by `GET /api/events`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub venue: String,
    pub available_tickets: u32,
    pub price: f64,
}

impl Event {
    fn new(id: i64, name: &str, date: &str, venue: &str, available_tickets: u32, price: f64) -> Self {
        // ---
        Self {
            id,
            name: name.to_string(),
            date: date.to_string(),
            venue: venue.to_string(),
            available_tickets,
            price,
        }
    }
}

/// An event as returned by `GET /api/events/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub description: String,
}

/// The events currently on sale.
pub fn featured_events() -> Vec<Event> {
    // ---
    vec![
        Event::new(1, "Tech Conference 2025", "2025-11-15", "London Convention Center", 500, 99.99),
        Event::new(2, "Summer Music Festival", "2025-07-20", "Hyde Park", 2000, 149.99),
        Event::new(3, "Comedy Night", "2025-06-10", "O2 Arena", 150, 45.00),
    ]
}

/// Synthesizes the detail view for any id; unknown ids are not rejected.
pub fn event_detail(id: i64) -> EventDetail {
    // ---
    EventDetail {
        event: Event::new(
            id,
            &format!("Event {id}"),
            "2025-11-15",
            "London Convention Center",
            500,
            99.99,
        ),
        description: "An amazing event you won't want to miss!".to_string(),
    }
}
