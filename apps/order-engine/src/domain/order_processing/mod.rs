//! Order Processing Bounded Context
//!
//! Orders reference exactly one priceable item and compute their own total.
//!
//! # Key Concepts
//!
//! - **Priceable**: anything that can report a price; new product kinds are
//!   added by implementing the trait, `Order` never changes for them
//! - **Order Aggregate**: one item, one quantity, validated on creation
//! - **Receipt**: the record handed back once an order has been persisted

pub mod aggregate;
pub mod errors;
pub mod product;
pub mod receipt;

pub use aggregate::{CreateOrderCommand, Order};
pub use errors::OrderError;
pub use product::{DiscountedProduct, Priceable, Product};
pub use receipt::OrderReceipt;
