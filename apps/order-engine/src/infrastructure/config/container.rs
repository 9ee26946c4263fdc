//! Dependency Injection Container
//!
//! Owns the data access backend and hands shared references to the use
//! cases it builds. This is the only place a backend is chosen.

use std::sync::Arc;

use crate::application::ports::DataAccessPort;
use crate::application::use_cases::OrderProcessor;
use crate::config::PersistenceConfig;
use crate::infrastructure::persistence::create_data_access;

/// Dependency injection container.
///
/// Use `Container::new` with a specific backend, or `Container::from_config`
/// to select one at runtime.
pub struct Container<D>
where
    D: DataAccessPort + ?Sized + 'static,
{
    data_access: Arc<D>,
}

impl<D> Container<D>
where
    D: DataAccessPort + ?Sized + 'static,
{
    /// Create a new container around an existing backend.
    pub const fn new(data_access: Arc<D>) -> Self {
        Self { data_access }
    }

    /// Get the data access port.
    pub fn data_access(&self) -> Arc<D> {
        Arc::clone(&self.data_access)
    }

    /// Create an `OrderProcessor` sharing this container's backend.
    pub fn order_processor(&self) -> OrderProcessor<D> {
        OrderProcessor::new(Arc::clone(&self.data_access))
    }
}

impl Container<dyn DataAccessPort> {
    /// Create a container with the backend named in `config`.
    #[must_use]
    pub fn from_config(config: &PersistenceConfig) -> Self {
        Self::new(create_data_access(config))
    }
}
