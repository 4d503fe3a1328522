use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry};

/// The four instruments exported by the service, registered in one registry.
pub struct Instruments {
    pub requests: IntCounterVec,
    pub latency: HistogramVec,
    pub errors: IntCounterVec,
    pub db_connections: IntGauge,
}

impl Instruments {
    /// Create every instrument and register it with `registry`.
    pub fn register(registry: &Registry) -> prometheus::Result<Self> {
        // ---
        let requests = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests"),
            &["method", "endpoint", "code"],
        )?;
        let latency = HistogramVec::new(
            HistogramOpts::new(
                "http_request_latency_seconds",
                "HTTP request latency in seconds",
            ),
            &["method", "endpoint"],
        )?;
        let errors = IntCounterVec::new(
            Opts::new("http_errors_total", "Total HTTP errors"),
            &["method", "endpoint", "code"],
        )?;
        let db_connections =
            IntGauge::new("db_active_connections", "Number of active database connections")?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(latency.clone()))?;
        registry.register(Box::new(errors.clone()))?;
        registry.register(Box::new(db_connections.clone()))?;

        Ok(Self {
            requests,
            latency,
            errors,
            db_connections,
        })
    }
}
