//! Receipt returned after an order has been processed.

use serde::{Deserialize, Serialize};

use crate::domain::order_processing::aggregate::Order;
use crate::domain::shared::{Money, OrderId, Quantity, Sku, Timestamp};

/// Outcome of a successfully processed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Processed order.
    pub order_id: OrderId,
    /// Item SKU.
    pub sku: Sku,
    /// Units ordered.
    pub quantity: Quantity,
    /// Total charged.
    pub total: Money,
    /// Rows written by the backend for this order.
    pub rows_affected: u64,
    /// When processing finished.
    pub processed_at: Timestamp,
}

impl OrderReceipt {
    /// Build a receipt for `order`.
    #[must_use]
    pub fn for_order(order: &Order, total: Money, rows_affected: u64) -> Self {
        Self {
            order_id: order.id().clone(),
            sku: order.item().sku().clone(),
            quantity: order.quantity(),
            total,
            rows_affected,
            processed_at: Timestamp::now(),
        }
    }
}
