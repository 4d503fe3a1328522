// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Every value has a usable default: the service must come up (and answer
//! liveness probes) even when no database is configured.

use anyhow::Result;
use std::time::Duration;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable.
///
/// Empty values are treated the same as a missing variable.
macro_rules! optional_env {
    // ---
    ($key:literal) => {
        std::env::var($key).ok().filter(|v| !v.trim().is_empty())
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: server::ServerConfig,
    pub database: database::DatabaseConfig,
    pub metrics: metrics::MetricsConfig,
}

impl AppConfig {
    /// Loads all application configuration from the environment.
    ///
    /// # Errors
    /// Currently infallible in practice; the `Result` keeps the signature
    /// stable for future required settings.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
            database: database::DatabaseConfig::from_env()?,
            metrics: metrics::MetricsConfig::from_env()?,
        })
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// Address the HTTP listener binds to.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Socket address, `0.0.0.0:8000` unless `AEGIS_BIND_ADDR` is set.
        pub bind_addr: String,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind_addr: "0.0.0.0:8000".to_string(),
            }
        }
    }

    impl ServerConfig {
        pub fn from_env() -> Result<Self> {
            // ---
            let bind_addr = optional_env!("AEGIS_BIND_ADDR").unwrap_or(Self::default().bind_addr);

            Ok(Self { bind_addr })
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Database configuration
// ============================================================

mod database {
    // ---
    use super::*;

    /// Upper bound on a single readiness probe step.
    pub const MAX_PROBE_TIMEOUT: Duration = Duration::from_millis(2000);

    /// Database settings used by the readiness probe.
    ///
    /// The database is optional. A missing `DATABASE_URL` makes the service
    /// report "not ready" rather than refusing to start.
    #[derive(Debug, Clone)]
    pub struct DatabaseConfig {
        /// PostgreSQL connection string, if one is configured.
        pub database_url: Option<String>,

        /// Time allowed for acquiring a connection and for the probe query.
        /// Defaults to 2 seconds and never exceeds it.
        pub probe_timeout: Duration,

        /// Maximum number of pooled probe connections. Defaults to 2.
        pub max_connections: u32,
    }

    impl Default for DatabaseConfig {
        fn default() -> Self {
            Self {
                database_url: None,
                probe_timeout: MAX_PROBE_TIMEOUT,
                max_connections: 2,
            }
        }
    }

    impl DatabaseConfig {
        /// Builds a [`DatabaseConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let database_url = optional_env!("DATABASE_URL");
            let timeout_ms = optional_env_parse!("AEGIS_DB_PROBE_TIMEOUT_MS", u64, 2000);
            let max_connections = optional_env_parse!("AEGIS_DB_MAX_CONNECTIONS", u32, 2).max(1);

            Ok(Self {
                database_url,
                probe_timeout: Duration::from_millis(timeout_ms).min(MAX_PROBE_TIMEOUT),
                max_connections,
            })
        }
    }
}
pub use database::{DatabaseConfig, MAX_PROBE_TIMEOUT};

// ============================================================
// Metrics configuration
// ============================================================

mod metrics {
    // ---
    use super::*;

    /// Which metrics implementation backs the registry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum MetricsBackend {
        /// Prometheus registry rendered at `/metrics`.
        #[default]
        Prometheus,
        /// Recording disabled; `/metrics` renders an empty body.
        Noop,
    }

    #[derive(Debug, Clone, Default)]
    pub struct MetricsConfig {
        pub backend: MetricsBackend,
    }

    impl MetricsConfig {
        /// Reads `AEGIS_METRICS_TYPE` (`prom` or `noop`, default `prom`).
        pub fn from_env() -> Result<Self> {
            // ---
            let backend = match optional_env!("AEGIS_METRICS_TYPE").as_deref() {
                Some("noop") => MetricsBackend::Noop,
                Some("prom") | None => MetricsBackend::Prometheus,
                Some(other) => {
                    tracing::warn!("Unknown AEGIS_METRICS_TYPE '{other}', using prom");
                    MetricsBackend::Prometheus
                }
            };

            Ok(Self { backend })
        }
    }
}
pub use metrics::{MetricsBackend, MetricsConfig};

// ============================================================
// Tests
// ============================================================
