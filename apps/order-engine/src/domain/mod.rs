//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Capability Traits**: Narrow behavior contracts implemented only where honored
//!
//! # Bounded Contexts
//!
//! - [`order_processing`]: Orders, priceable items, receipts
//! - [`capabilities`]: Capability narrowing (flight)

pub mod capabilities;
pub mod order_processing;
pub mod shared;
