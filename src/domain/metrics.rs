use std::sync::Arc;

/// Abstraction for application metrics (counters, histograms, gauges).
///
/// Implementations are shared across concurrent requests and must never
/// lose an update or fail while recording.
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Count one handled request for the given label combination.
    fn increment_request(&self, method: &str, endpoint: &str, status: u16);

    /// Record how long a request took, in seconds (never negative).
    fn observe_latency(&self, method: &str, endpoint: &str, seconds: f64);

    /// Count one server-side error (status >= 500).
    fn increment_error(&self, method: &str, endpoint: &str, status: u16);

    /// Publish the number of open database connections.
    fn set_db_connections(&self, count: i64);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
