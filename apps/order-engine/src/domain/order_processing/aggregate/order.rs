//! Order Aggregate Root
//!
//! An order references exactly one priceable item. The reference is held as
//! `Arc<dyn Priceable>` so it can never be absent and the aggregate never
//! names a concrete product type.

use std::sync::Arc;

use crate::domain::order_processing::errors::OrderError;
use crate::domain::order_processing::product::Priceable;
use crate::domain::shared::{Money, OrderId, Quantity, Timestamp};

/// Command to create a new order.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Item being purchased.
    pub item: Arc<dyn Priceable>,
    /// Number of units.
    pub quantity: Quantity,
}

impl CreateOrderCommand {
    /// Order a single unit of `item`.
    #[must_use]
    pub fn single(item: Arc<dyn Priceable>) -> Self {
        Self {
            item,
            quantity: Quantity::ONE,
        }
    }
}

/// Order aggregate root.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    item: Arc<dyn Priceable>,
    quantity: Quantity,
    created_at: Timestamp,
}

impl Order {
    /// Create a new order with a generated id.
    ///
    /// # Errors
    ///
    /// Returns error if the item or quantity is not valid for an order.
    pub fn new(command: CreateOrderCommand) -> Result<Self, OrderError> {
        Self::with_id(OrderId::generate(), command)
    }

    /// Create an order with a caller-supplied id.
    ///
    /// # Errors
    ///
    /// Returns error if the id is blank or the item or quantity is invalid.
    pub fn with_id(id: OrderId, command: CreateOrderCommand) -> Result<Self, OrderError> {
        if id.is_blank() {
            return Err(OrderError::InvalidParameters {
                field: "id".to_string(),
                message: "Order id must not be empty".to_string(),
            });
        }

        let order = Self {
            id,
            item: command.item,
            quantity: command.quantity,
            created_at: Timestamp::now(),
        };
        order.validate()?;
        Ok(order)
    }

    /// Order id.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// The referenced item.
    #[must_use]
    pub fn item(&self) -> &dyn Priceable {
        self.item.as_ref()
    }

    /// Number of units ordered.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// When the order was created.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Check that the order can be processed.
    ///
    /// Item prices are read through the trait, so this is re-run at
    /// processing time rather than trusted from creation.
    ///
    /// # Errors
    ///
    /// Returns error if the item has a blank SKU or an out-of-range price,
    /// or if the quantity is out of range.
    pub fn validate(&self) -> Result<(), OrderError> {
        let sku = self.item.sku();
        if sku.is_blank() {
            return Err(OrderError::InvalidItem {
                sku: sku.to_string(),
                message: "SKU must not be empty".to_string(),
            });
        }

        self.item
            .price()
            .validate_for_order()
            .map_err(|e| OrderError::InvalidItem {
                sku: sku.to_string(),
                message: e.to_string(),
            })?;

        self.quantity.validate_for_order()?;
        Ok(())
    }

    /// Total cost: unit price times quantity, rounded to cents.
    #[must_use]
    pub fn calculate_total(&self) -> Money {
        (self.item.price() * self.quantity.amount()).round()
    }
}
