//! Persistence configuration.

use serde::{Deserialize, Serialize};

/// Which data access backend to wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceBackend {
    /// Recording in-memory backend (nothing survives the process).
    #[default]
    Memory,
    /// Local Turso database at `db_path`.
    Turso,
}

/// Persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Backend to use.
    #[serde(default)]
    pub backend: PersistenceBackend,
    /// Database path for the Turso backend (`:memory:` allowed).
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: PersistenceBackend::default(),
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> String {
    "./data/orders.db".to_string()
}
