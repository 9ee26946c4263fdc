//! Capability Traits
//!
//! A behavior that only some variants support gets its own trait. Variants
//! that cannot honor it simply do not implement it, so asking for it is a
//! compile error instead of a runtime failure.

pub mod flight;

pub use flight::{Bird, Flyable, Ostrich, Sparrow, launch};
