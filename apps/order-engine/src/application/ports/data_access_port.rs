//! Data Access Port (Driven Port)
//!
//! Interface for any persistence backend able to run textual queries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Data access error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataAccessError {
    /// Backend unreachable, misconfigured, or not connected.
    #[error("Data access connection error: {message}")]
    Connection {
        /// What went wrong.
        message: String,
    },

    /// Query malformed or rejected by the backend.
    #[error("Data access query error: {message}")]
    Query {
        /// What went wrong.
        message: String,
    },
}

impl DataAccessError {
    /// Build a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a query error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Returns true for connection failures.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// Returns true for query failures.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query { .. })
    }
}

/// Result of a successfully executed query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    /// Rows inserted, updated or deleted.
    pub rows_affected: u64,
}

/// Port for a persistence backend.
///
/// Contract shared by every implementation:
/// - `connect` on an open connection joins it as another session.
/// - `disconnect` ends one session and closes the connection after the last
///   one. It never fails when nothing is connected.
/// - `execute_query` rejects blank text with [`DataAccessError::Query`] and
///   requires an open connection.
#[async_trait]
pub trait DataAccessPort: Send + Sync {
    /// Establish a connection.
    async fn connect(&self) -> Result<(), DataAccessError>;

    /// Release the connection.
    async fn disconnect(&self) -> Result<(), DataAccessError>;

    /// Execute a query given as text.
    async fn execute_query(&self, query: &str) -> Result<QueryOutcome, DataAccessError>;
}

/// Reject blank query text.
///
/// Adapters call this before touching the backend.
pub fn ensure_query_text(query: &str) -> Result<(), DataAccessError> {
    if query.trim().is_empty() {
        return Err(DataAccessError::query("query must not be empty"));
    }
    Ok(())
}
