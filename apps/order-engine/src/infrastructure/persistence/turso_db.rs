//! Turso data access.
//!
//! Embedded SQLite-compatible database via the `turso` crate. The database
//! handle is opened on first `connect` and kept for the adapter's lifetime,
//! so `:memory:` databases survive disconnects; `disconnect` only drops the
//! connection. The connection is shared by overlapping sessions and dropped
//! when the last one disconnects.

use std::path::Path;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{
    DataAccessError, DataAccessPort, QueryOutcome, ensure_query_text,
};

/// Path that opens a private in-memory database.
pub const IN_MEMORY_PATH: &str = ":memory:";

#[derive(Default)]
struct State {
    database: Option<::turso::Database>,
    connection: Option<::turso::Connection>,
    sessions: usize,
}

/// `DataAccessPort` backed by a local Turso database.
pub struct TursoDataAccess {
    path: String,
    state: Mutex<State>,
}

impl TursoDataAccess {
    /// Create an adapter for the database at `path` (`:memory:` for a
    /// private in-memory database). Nothing is opened until `connect`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: Mutex::new(State::default()),
        }
    }

    /// Database path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether a connection is currently open.
    pub async fn is_connected(&self) -> bool {
        self.state.lock().await.connection.is_some()
    }

    async fn ensure_parent_dir(&self) -> Result<(), DataAccessError> {
        if self.path == IN_MEMORY_PATH {
            return Ok(());
        }
        match Path::new(&self.path).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    DataAccessError::connection(format!(
                        "failed to create directory '{}': {e}",
                        parent.display()
                    ))
                })
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Debug for TursoDataAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TursoDataAccess")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DataAccessPort for TursoDataAccess {
    async fn connect(&self) -> Result<(), DataAccessError> {
        let mut state = self.state.lock().await;
        if state.connection.is_some() {
            state.sessions += 1;
            return Ok(());
        }

        if state.database.is_none() {
            self.ensure_parent_dir().await?;
            let database = ::turso::Builder::new_local(&self.path)
                .build()
                .await
                .map_err(|e| {
                    DataAccessError::connection(format!(
                        "failed to open database '{}': {e}",
                        self.path
                    ))
                })?;
            state.database = Some(database);
        }

        let connection = match state.database.as_ref() {
            Some(database) => database
                .connect()
                .map_err(|e| DataAccessError::connection(e.to_string()))?,
            None => return Err(DataAccessError::connection("database not open")),
        };
        state.connection = Some(connection);
        state.sessions = 1;

        tracing::debug!(path = %self.path, "Turso connection opened");
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DataAccessError> {
        let mut state = self.state.lock().await;
        state.sessions = state.sessions.saturating_sub(1);
        if state.sessions == 0 && state.connection.take().is_some() {
            tracing::debug!(path = %self.path, "Turso connection closed");
        }
        Ok(())
    }

    async fn execute_query(&self, query: &str) -> Result<QueryOutcome, DataAccessError> {
        ensure_query_text(query)?;

        let state = self.state.lock().await;
        let Some(connection) = state.connection.as_ref() else {
            return Err(DataAccessError::connection("not connected"));
        };

        let rows_affected = connection
            .execute(query, ())
            .await
            .map_err(|e| DataAccessError::query(e.to_string()))?;

        tracing::debug!(rows_affected, "Turso query executed");
        Ok(QueryOutcome { rows_affected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disconnect_without_connect_is_ok() {
        let db = TursoDataAccess::new(":memory:");
        assert!(db.disconnect().await.is_ok());
        assert!(!db.is_connected().await);
    }

    #[tokio::test]
    async fn empty_query_is_query_error() {
        let db = TursoDataAccess::new(":memory:");
        assert!(db.execute_query("").await.unwrap_err().is_query());

        db.connect().await.unwrap();
        assert!(db.execute_query("  ").await.unwrap_err().is_query());
    }

    #[tokio::test]
    async fn query_without_connection_fails() {
        let db = TursoDataAccess::new(":memory:");
        assert!(db.execute_query("SELECT 1").await.unwrap_err().is_connection());
    }

    #[tokio::test]
    async fn malformed_query_is_query_error() {
        let db = TursoDataAccess::new(":memory:");
        db.connect().await.unwrap();
        let err = db.execute_query("NOT VALID SQL AT ALL").await.unwrap_err();
        assert!(err.is_query());
    }

    #[tokio::test]
    async fn connect_twice_is_noop() {
        let db = TursoDataAccess::new(":memory:");
        db.connect().await.unwrap();
        db.connect().await.unwrap();
        assert!(db.is_connected().await);
    }

    #[tokio::test]
    async fn connection_closes_after_last_session() {
        let db = TursoDataAccess::new(":memory:");
        db.connect().await.unwrap();
        db.connect().await.unwrap();

        db.disconnect().await.unwrap();
        assert!(db.is_connected().await);
        assert!(db.execute_query("CREATE TABLE t (v TEXT)").await.is_ok());

        db.disconnect().await.unwrap();
        assert!(!db.is_connected().await);
    }

    #[tokio::test]
    async fn unusable_path_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();
        let path = blocker.join("sub").join("orders.db");
        let db = TursoDataAccess::new(path.to_string_lossy());

        let err = db.connect().await.unwrap_err();

        assert!(err.is_connection(), "{err}");
        assert!(!db.is_connected().await);
    }

    #[tokio::test]
    async fn in_memory_table_survives_reconnect() {
        let db = TursoDataAccess::new(":memory:");

        db.connect().await.unwrap();
        db.execute_query("CREATE TABLE t (v TEXT NOT NULL)")
            .await
            .unwrap();
        db.disconnect().await.unwrap();

        db.connect().await.unwrap();
        let outcome = db
            .execute_query("INSERT INTO t (v) VALUES ('x')")
            .await
            .unwrap();
        assert_eq!(outcome.rows_affected, 1);
    }

    #[tokio::test]
    async fn file_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("orders.db");
        let db = TursoDataAccess::new(path.to_string_lossy());

        db.connect().await.unwrap();
        db.execute_query("CREATE TABLE IF NOT EXISTS t (v TEXT)")
            .await
            .unwrap();
        db.disconnect().await.unwrap();

        assert!(path.exists());
    }
}
