use std::fmt;
use std::sync::Arc;

/// Why a readiness probe against the database failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// No connection could be established.
    Unreachable(String),
    /// A connection was obtained but `SELECT 1` failed or timed out.
    Query(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Unreachable(reason) => write!(f, "database unreachable: {reason}"),
            ProbeError::Query(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Abstraction for the SQL collaborator behind the readiness probe.
#[async_trait::async_trait]
pub trait Database: Send + Sync {
    // ---
    /// Run one `SELECT 1` round trip, bounded by the configured timeout.
    async fn ping(&self) -> Result<(), ProbeError>;

    /// Number of connections currently open to the database.
    fn active_connections(&self) -> i64;
}

/// Type alias for any backend that implements Database.
pub type DatabasePtr = Arc<dyn Database>;
