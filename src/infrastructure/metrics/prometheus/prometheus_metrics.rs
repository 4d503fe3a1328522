//! Prometheus metrics implementation.
//!
//! Each [`PrometheusMetrics`] owns its own `prometheus::Registry`. Nothing is
//! registered globally, so independent instances (one per process, or one
//! per test) never see each other's samples.

use super::instruments::Instruments;
use crate::domain::Metrics;
use prometheus::{Encoder, Registry, TextEncoder};

/// Prometheus-based metrics implementation.
///
/// The `prometheus` vectors use atomics internally, so concurrent requests
/// can record without an extra lock and `render` can run at any time.
pub struct PrometheusMetrics {
    registry: Registry,
    instruments: Instruments,
}

impl PrometheusMetrics {
    pub fn new() -> prometheus::Result<Self> {
        // ---
        tracing::info!("Creating Prometheus metrics");
        let registry = Registry::new();
        let instruments = Instruments::register(&registry)?;

        Ok(PrometheusMetrics {
            registry,
            instruments,
        })
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        // ---
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(err) = encoder.encode(&self.registry.gather(), &mut buffer) {
            tracing::error!("Failed to encode metrics: {err}");
            return String::new();
        }

        String::from_utf8(buffer).unwrap_or_else(|err| {
            tracing::error!("Metrics output is not valid UTF-8: {err}");
            String::new()
        })
    }

    fn increment_request(&self, method: &str, endpoint: &str, status: u16) {
        // ---
        let code = status.to_string();
        self.instruments
            .requests
            .with_label_values(&[method, endpoint, code.as_str()])
            .inc();
    }

    fn observe_latency(&self, method: &str, endpoint: &str, seconds: f64) {
        // ---
        self.instruments
            .latency
            .with_label_values(&[method, endpoint])
            .observe(seconds);
    }

    fn increment_error(&self, method: &str, endpoint: &str, status: u16) {
        // ---
        let code = status.to_string();
        self.instruments
            .errors
            .with_label_values(&[method, endpoint, code.as_str()])
            .inc();
    }

    fn set_db_connections(&self, count: i64) {
        self.instruments.db_connections.set(count);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use std::sync::Arc;

    fn sample<'a>(body: &'a str, prefix: &str) -> Option<&'a str> {
        body.lines()
            .find(|line| line.starts_with(prefix))
            .and_then(|line| line.rsplit(' ').next())
    }

    #[test]
    fn render_contains_recorded_request() {
        // ---
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.increment_request("GET", "get_events", 200);
        metrics.observe_latency("GET", "get_events", 0.01);

        let body = metrics.render();
        assert!(body.contains("http_requests_total"));
        assert!(body.contains(r#"endpoint="get_events""#));
        assert!(body.contains("http_request_latency_seconds_count"));
    }

    #[test]
    fn errors_are_counted_separately() {
        // ---
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.increment_request("POST", "checkout", 503);
        metrics.increment_error("POST", "checkout", 503);
        metrics.increment_error("POST", "checkout", 503);

        let body = metrics.render();
        assert_eq!(sample(&body, "http_errors_total{"), Some("2"));
        assert_eq!(sample(&body, "http_requests_total{"), Some("1"));
    }

    #[test]
    fn gauge_reports_last_value() {
        // ---
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.set_db_connections(3);
        metrics.set_db_connections(1);

        let body = metrics.render();
        assert_eq!(sample(&body, "db_active_connections "), Some("1"));
    }

    #[test]
    fn instances_do_not_share_samples() {
        // ---
        let first = PrometheusMetrics::new().unwrap();
        let second = PrometheusMetrics::new().unwrap();
        first.increment_request("GET", "get_event", 200);

        assert!(first.render().contains("http_requests_total"));
        assert!(!second.render().contains("http_requests_total{"));
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        // ---
        let metrics = Arc::new(PrometheusMetrics::new().unwrap());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        metrics.increment_request("GET", "get_events", 200);
                        metrics.observe_latency("GET", "get_events", 0.001);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let body = metrics.render();
        assert_eq!(sample(&body, "http_requests_total{"), Some("2000"));
        assert_eq!(sample(&body, "http_request_latency_seconds_count{"), Some("2000"));
    }
}
