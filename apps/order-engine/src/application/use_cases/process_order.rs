//! Process Order Use Case
//!
//! `OrderProcessor` persists orders through an injected [`DataAccessPort`].
//! It never constructs or names a backend; whoever builds the processor owns
//! the backend and hands in a shared reference.

use std::sync::Arc;

use tracing::Instrument;

use crate::application::ports::{DataAccessError, DataAccessPort, QueryOutcome};
use crate::application::queries;
use crate::domain::order_processing::{Order, OrderError, OrderReceipt};

/// Error raised when a component is wired without a required collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// A required dependency was not supplied.
    #[error("Missing required dependency: {dependency}")]
    MissingDependency {
        /// Name of the missing collaborator.
        dependency: &'static str,
    },
}

/// Errors from [`OrderProcessor::process_order`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessOrderError {
    /// The order failed validation; the backend was not touched.
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] OrderError),

    /// The backend reported a failure.
    #[error(transparent)]
    DataAccess(#[from] DataAccessError),
}

/// Use case for processing orders.
///
/// `D` may be a trait object (`OrderProcessor<dyn DataAccessPort>`) when the
/// backend is chosen at runtime.
pub struct OrderProcessor<D>
where
    D: DataAccessPort + ?Sized,
{
    data_access: Arc<D>,
}

impl<D> OrderProcessor<D>
where
    D: DataAccessPort + ?Sized,
{
    /// Create a new OrderProcessor.
    pub const fn new(data_access: Arc<D>) -> Self {
        Self { data_access }
    }

    /// Start building a processor.
    pub fn builder() -> OrderProcessorBuilder<D> {
        OrderProcessorBuilder::default()
    }

    /// Create a processor from a dependency that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingDependency`] when `data_access` is `None`.
    pub fn try_from_optional(data_access: Option<Arc<D>>) -> Result<Self, ConfigurationError> {
        data_access
            .map(Self::new)
            .ok_or(ConfigurationError::MissingDependency {
                dependency: "data_access",
            })
    }

    /// Create the orders table if the backend does not have it yet.
    pub async fn initialize_schema(&self) -> Result<(), ProcessOrderError> {
        self.run_in_session(queries::CREATE_ORDERS_TABLE).await?;
        tracing::debug!("Order schema initialized");
        Ok(())
    }

    /// Validate, price and record an order.
    ///
    /// Opens a connection, executes the insert statement, and closes the
    /// connection again. Backend failures are returned unchanged.
    pub async fn process_order(&self, order: &Order) -> Result<OrderReceipt, ProcessOrderError> {
        let span = tracing::info_span!("process_order", order_id = %order.id());
        self.process_order_inner(order).instrument(span).await
    }

    async fn process_order_inner(&self, order: &Order) -> Result<OrderReceipt, ProcessOrderError> {
        order.validate()?;

        let total = order.calculate_total();
        let statement = queries::insert_order(order, total);

        let outcome = self.run_in_session(&statement).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to persist order");
        })?;

        tracing::info!(
            sku = %order.item().sku(),
            quantity = %order.quantity(),
            total = %total,
            "Order processed"
        );

        Ok(OrderReceipt::for_order(order, total, outcome.rows_affected))
    }

    /// Connect, run one statement, disconnect.
    ///
    /// A failed statement wins over a failed disconnect; the latter is logged.
    async fn run_in_session(&self, statement: &str) -> Result<QueryOutcome, DataAccessError> {
        self.data_access.connect().await?;

        let result = self.data_access.execute_query(statement).await;
        let disconnected = self.data_access.disconnect().await;

        match (result, disconnected) {
            (Ok(outcome), Ok(())) => Ok(outcome),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(disconnect_err)) => {
                tracing::warn!(error = %disconnect_err, "Disconnect after failed query also failed");
                Err(e)
            }
        }
    }
}

impl<D> Clone for OrderProcessor<D>
where
    D: DataAccessPort + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            data_access: Arc::clone(&self.data_access),
        }
    }
}

/// Builder for [`OrderProcessor`].
pub struct OrderProcessorBuilder<D>
where
    D: DataAccessPort + ?Sized,
{
    data_access: Option<Arc<D>>,
}

impl<D> Default for OrderProcessorBuilder<D>
where
    D: DataAccessPort + ?Sized,
{
    fn default() -> Self {
        Self { data_access: None }
    }
}

impl<D> OrderProcessorBuilder<D>
where
    D: DataAccessPort + ?Sized,
{
    /// Set the data access backend.
    #[must_use]
    pub fn data_access(mut self, data_access: Arc<D>) -> Self {
        self.data_access = Some(data_access);
        self
    }

    /// Build the processor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingDependency`] if no backend was set.
    pub fn build(self) -> Result<OrderProcessor<D>, ConfigurationError> {
        OrderProcessor::try_from_optional(self.data_access)
    }
}
