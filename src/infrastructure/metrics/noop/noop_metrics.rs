use crate::domain::Metrics;

/// No-op metrics implementation.
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> String {
        String::new()
    }
    fn increment_request(&self, _: &str, _: &str, _: u16) {}
    fn observe_latency(&self, _: &str, _: &str, _: f64) {}
    fn increment_error(&self, _: &str, _: &str, _: u16) {}
    fn set_db_connections(&self, _: i64) {}
}
