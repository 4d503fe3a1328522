use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::domain::{Database, DatabasePtr, ProbeError};

/// Builds the readiness database from configuration.
///
/// Returns `Ok(None)` when no `DATABASE_URL` is configured. The pool
/// connects lazily, so an unreachable server never blocks startup.
///
/// # Errors
/// Returns an error if the connection string cannot be parsed.
/// Must be called from within a Tokio runtime.
pub fn create_postgres_database(config: &DatabaseConfig) -> Result<Option<DatabasePtr>> {
    // ---
    let Some(url) = config.database_url.as_deref() else {
        return Ok(None);
    };

    let options: PgConnectOptions = url.parse().context("Invalid DATABASE_URL")?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(0)
        .acquire_timeout(config.probe_timeout)
        .connect_lazy_with(options);

    Ok(Some(Arc::new(PostgresDatabase::new(pool, config.probe_timeout))))
}

pub struct PostgresDatabase {
    // ---
    pool: PgPool,
    probe_timeout: Duration,
}

impl PostgresDatabase {
    // ---
    pub fn new(pool: PgPool, probe_timeout: Duration) -> Self {
        // ---
        Self {
            pool,
            probe_timeout,
        }
    }
}

#[async_trait::async_trait]
impl Database for PostgresDatabase {
    // ---
    async fn ping(&self) -> Result<(), ProbeError> {
        // ---
        let mut conn = self.pool.acquire().await.map_err(|err| {
            tracing::error!("Database connection failed: {err}");
            ProbeError::Unreachable(err.to_string())
        })?;

        let probe = sqlx::query("SELECT 1").execute(&mut *conn);
        match tokio::time::timeout(self.probe_timeout, probe).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(err)) => Err(ProbeError::Query(err.to_string())),
            Err(_) => Err(ProbeError::Query(format!(
                "SELECT 1 timed out after {}ms",
                self.probe_timeout.as_millis()
            ))),
        }
    }

    fn active_connections(&self) -> i64 {
        // ---
        i64::from(self.pool.size())
    }
}
