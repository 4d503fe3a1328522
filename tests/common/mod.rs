// Test helpers are intentionally partially used
#![allow(dead_code)]

use aegis_tickets::domain::{Database, DatabasePtr, MetricsPtr, ProbeError};
use aegis_tickets::{build_router, create_prom_metrics, AppState};
use axum::Router;
use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

// ============================================================================
// Test Setup
// ============================================================================

/// Fresh Prometheus registry; every test owns its own.
pub fn prom_metrics() -> MetricsPtr {
    // ---
    create_prom_metrics().expect("Should be able to create metrics")
}

pub fn test_router(metrics: &MetricsPtr, database: Option<DatabasePtr>) -> Router {
    // ---
    build_router(AppState::new(metrics.clone(), database))
}

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
    pub metrics: MetricsPtr,
}

impl TestServer {
    // ---
    pub async fn new() -> Self {
        // ---
        Self::with_database(None).await
    }

    pub async fn with_database(database: Option<DatabasePtr>) -> Self {
        // ---
        let metrics = prom_metrics();
        let app = test_router(&metrics, database);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background; the listener is already bound,
        // so requests queue until it starts accepting.
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::new();

        Self {
            addr,
            client,
            metrics,
        }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }
}

// ============================================================================
// Metrics helpers
// ============================================================================

/// Value of the first sample of `name` whose labels include all of `labels`,
/// or 0 when no such series exists yet.
pub fn sample(body: &str, name: &str, labels: &[(&str, &str)]) -> f64 {
    // ---
    let prefix = format!("{name}{{");
    body.lines()
        .filter(|line| line.starts_with(&prefix))
        .find(|line| {
            labels
                .iter()
                .all(|(key, value)| line.contains(&format!("{key}=\"{value}\"")))
        })
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0.0)
}

// ============================================================================
// Fake database
// ============================================================================

/// Scripted stand-in for PostgreSQL.
pub struct FakeDatabase {
    outcome: Result<(), ProbeError>,
    connections: i64,
    pings: AtomicUsize,
}

impl FakeDatabase {
    // ---
    pub fn healthy() -> Arc<Self> {
        Arc::new(Self::new(Ok(()), 1))
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self::new(
            Err(ProbeError::Unreachable("connection refused".into())),
            0,
        ))
    }

    pub fn failing_query(reason: &str) -> Arc<Self> {
        Arc::new(Self::new(Err(ProbeError::Query(reason.into())), 1))
    }

    fn new(outcome: Result<(), ProbeError>, connections: i64) -> Self {
        Self {
            outcome,
            connections,
            pings: AtomicUsize::new(0),
        }
    }

    pub fn pings(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Database for FakeDatabase {
    // ---
    async fn ping(&self) -> Result<(), ProbeError> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    fn active_connections(&self) -> i64 {
        self.connections
    }
}
