//! Use Cases
//!
//! Application services coordinating domain objects and ports.

mod process_order;

pub use process_order::{
    ConfigurationError, OrderProcessor, OrderProcessorBuilder, ProcessOrderError,
};
