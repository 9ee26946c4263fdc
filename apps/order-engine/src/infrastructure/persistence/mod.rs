//! Persistence Adapters
//!
//! Implementations of [`DataAccessPort`] and the factory that selects one
//! from configuration.

pub mod in_memory;
pub mod turso_db;

use std::sync::Arc;

pub use in_memory::{DataAccessCall, InMemoryDataAccess};
pub use turso_db::TursoDataAccess;

use crate::application::ports::DataAccessPort;
use crate::config::{PersistenceBackend, PersistenceConfig};

/// Build the backend named by `config`.
///
/// The caller owns the returned handle and shares it with consumers.
#[must_use]
pub fn create_data_access(config: &PersistenceConfig) -> Arc<dyn DataAccessPort> {
    match config.backend {
        PersistenceBackend::Memory => {
            tracing::info!("Using in-memory data access");
            Arc::new(InMemoryDataAccess::new())
        }
        PersistenceBackend::Turso => {
            tracing::info!(db_path = %config.db_path, "Using Turso data access");
            Arc::new(TursoDataAccess::new(config.db_path.clone()))
        }
    }
}
