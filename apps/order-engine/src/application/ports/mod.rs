//! Application Ports (Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! Use cases depend on these traits only; adapters live in `infrastructure`.

mod data_access_port;

pub use data_access_port::{DataAccessError, DataAccessPort, QueryOutcome, ensure_query_text};
