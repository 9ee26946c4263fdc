//! Statement text sent through [`DataAccessPort`](crate::application::ports::DataAccessPort).
//!
//! Plain SQL understood by SQLite-compatible backends. Values are inlined as
//! quoted literals because the port accepts text only.

use crate::domain::order_processing::Order;
use crate::domain::shared::Money;

/// Creates the orders table when missing.
pub const CREATE_ORDERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS orders (\
order_id TEXT NOT NULL, \
sku TEXT NOT NULL, \
quantity TEXT NOT NULL, \
total TEXT NOT NULL, \
created_at TEXT NOT NULL)";

/// Quote `value` as an SQL string literal, doubling embedded quotes.
#[must_use]
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Insert statement recording a processed order.
#[must_use]
pub fn insert_order(order: &Order, total: Money) -> String {
    format!(
        "INSERT INTO orders (order_id, sku, quantity, total, created_at) VALUES ({}, {}, {}, {}, {})",
        quote_literal(order.id().as_str()),
        quote_literal(order.item().sku().as_str()),
        quote_literal(&order.quantity().amount().to_string()),
        quote_literal(&total.amount().to_string()),
        quote_literal(&order.created_at().to_rfc3339()),
    )
}
