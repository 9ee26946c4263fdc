//! Quantity value object for order lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Largest quantity accepted on a single order.
const MAX_ORDER_QUANTITY: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// A number of units of an item on an order.
///
/// Represented as a Decimal so weighed or metered goods can carry fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a new Quantity from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Quantity from an integer.
    #[must_use]
    pub fn from_i64(amount: i64) -> Self {
        Self(Decimal::new(amount, 0))
    }

    /// A single unit.
    pub const ONE: Self = Self(Decimal::ONE);

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this quantity is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Validate quantity for order processing.
    ///
    /// # Errors
    ///
    /// Returns error if quantity is zero, negative, or exceeds limits.
    pub fn validate_for_order(&self) -> Result<(), DomainError> {
        if !self.is_positive() {
            return Err(DomainError::invalid_value(
                "quantity",
                "Order quantity must be positive",
            ));
        }
        if self.0 > MAX_ORDER_QUANTITY {
            return Err(DomainError::invalid_value(
                "quantity",
                format!("Order quantity exceeds maximum: {MAX_ORDER_QUANTITY}"),
            ));
        }
        Ok(())
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract().is_zero() {
            write!(f, "{}", self.0.trunc())
        } else {
            write!(f, "{:.4}", self.0)
        }
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quantity_display() {
        assert_eq!(format!("{}", Quantity::from_i64(3)), "3");
        assert_eq!(format!("{}", Quantity::new(dec!(1.5))), "1.5000");
    }

    #[test]
    fn quantity_default_is_one() {
        assert_eq!(Quantity::default(), Quantity::ONE);
    }

    #[test]
    fn quantity_validate_for_order() {
        assert!(Quantity::from_i64(0).validate_for_order().is_err());
        assert!(Quantity::from_i64(-2).validate_for_order().is_err());
        assert!(Quantity::from_i64(100_001).validate_for_order().is_err());
        assert!(Quantity::from_i64(1).validate_for_order().is_ok());
        assert!(Quantity::new(dec!(0.25)).validate_for_order().is_ok());
    }
}
