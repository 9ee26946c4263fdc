//! In-memory data access for testing and development.
//!
//! Does not interpret SQL. Every call is recorded so tests can assert on the
//! exact interaction a consumer had with the port.
//!
//! Connections are counted: each `connect` opens a session and the backend
//! stays connected until every session has been closed.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::ports::{
    DataAccessError, DataAccessPort, QueryOutcome, ensure_query_text,
};

/// One recorded interaction with the port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataAccessCall {
    /// `connect` was called.
    Connect,
    /// `disconnect` was called.
    Disconnect,
    /// `execute_query` was called with this text.
    ExecuteQuery(String),
}

#[derive(Debug, Default)]
struct State {
    sessions: usize,
    calls: Vec<DataAccessCall>,
    executed: Vec<String>,
}

/// In-memory implementation of `DataAccessPort`.
///
/// Suitable for testing and development. Not for production use.
#[derive(Debug)]
pub struct InMemoryDataAccess {
    state: RwLock<State>,
    reachable: bool,
}

impl Default for InMemoryDataAccess {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDataAccess {
    /// Create a new backend that accepts connections.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
            reachable: true,
        }
    }

    /// Create a backend whose `connect` always fails.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            state: RwLock::new(State::default()),
            reachable: false,
        }
    }

    /// Every call made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<DataAccessCall> {
        self.read_state(|s| s.calls.clone())
    }

    /// Queries that executed successfully, in order.
    #[must_use]
    pub fn executed_queries(&self) -> Vec<String> {
        self.read_state(|s| s.executed.clone())
    }

    /// Whether at least one session is open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.read_state(|s| s.sessions > 0)
    }

    /// Forget recorded calls and queries. Connection state is kept.
    pub fn clear(&self) {
        self.write_state(|s| {
            s.calls.clear();
            s.executed.clear();
        });
    }

    fn read_state<T>(&self, f: impl FnOnce(&State) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn write_state<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

#[async_trait]
impl DataAccessPort for InMemoryDataAccess {
    async fn connect(&self) -> Result<(), DataAccessError> {
        let reachable = self.reachable;
        self.write_state(|s| {
            s.calls.push(DataAccessCall::Connect);
            if !reachable {
                return Err(DataAccessError::connection("in-memory backend is unreachable"));
            }
            s.sessions += 1;
            Ok(())
        })
    }

    async fn disconnect(&self) -> Result<(), DataAccessError> {
        self.write_state(|s| {
            s.calls.push(DataAccessCall::Disconnect);
            s.sessions = s.sessions.saturating_sub(1);
        });
        Ok(())
    }

    async fn execute_query(&self, query: &str) -> Result<QueryOutcome, DataAccessError> {
        self.write_state(|s| {
            s.calls.push(DataAccessCall::ExecuteQuery(query.to_string()));
            ensure_query_text(query)?;
            if s.sessions == 0 {
                return Err(DataAccessError::connection("not connected"));
            }

            s.executed.push(query.to_string());
            tracing::debug!(query, "In-memory query executed");

            let rows_affected = u64::from(
                query
                    .trim_start()
                    .get(..6)
                    .is_some_and(|verb| verb.eq_ignore_ascii_case("INSERT")),
            );
            Ok(QueryOutcome { rows_affected })
        })
    }
}
