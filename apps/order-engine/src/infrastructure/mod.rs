//! Infrastructure Layer
//!
//! Adapters implementing application ports, and the wiring that picks them.
//!
//! - `persistence`: data access backends (in-memory, Turso)
//! - `config`: dependency injection container

pub mod config;
pub mod persistence;
