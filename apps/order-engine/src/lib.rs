// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Order Engine - Rust Core Library
//!
//! Order processing that depends on a data-access abstraction instead of a
//! concrete database.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `order_processing`: Order aggregate, priceable items, receipts
//!   - `capabilities`: Narrow capability traits (flight)
//!   - `shared`: Money, Quantity, identifiers, timestamps
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `DataAccessPort`
//!   - `use_cases`: `OrderProcessor`
//!   - `queries`: Statement text sent through the port
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: In-memory and Turso data access
//!   - `config`: Dependency injection container

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and wiring.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::order_processing::{
    CreateOrderCommand, DiscountedProduct, Order, OrderError, OrderReceipt, Priceable, Product,
};
pub use domain::shared::{DomainError, Money, OrderId, Quantity, Sku, Timestamp};

// Application re-exports
pub use application::ports::{DataAccessError, DataAccessPort, QueryOutcome};
pub use application::use_cases::{
    ConfigurationError, OrderProcessor, OrderProcessorBuilder, ProcessOrderError,
};

// Infrastructure re-exports
pub use infrastructure::config::Container;
pub use infrastructure::persistence::{
    DataAccessCall, InMemoryDataAccess, TursoDataAccess, create_data_access,
};
