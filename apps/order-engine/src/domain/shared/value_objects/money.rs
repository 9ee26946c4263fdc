//! Money value object for currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;

use crate::domain::shared::DomainError;

/// Largest price accepted on a single order line.
const MAX_ORDER_AMOUNT: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// A monetary amount.
///
/// Represented as a Decimal for precise calculations.
/// Always uses 2 decimal places for display (but internal precision is higher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money value from cents (integer).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Round to 2 decimal places.
    #[must_use]
    pub fn round(&self) -> Self {
        Self(self.0.round_dp(2))
    }

    /// Check if within the allowed range for an order line.
    ///
    /// # Errors
    ///
    /// Returns error if amount is negative or exceeds max allowed.
    pub fn validate_for_order(&self) -> Result<(), DomainError> {
        if self.is_negative() {
            return Err(DomainError::invalid_value(
                "money",
                "Order amount cannot be negative",
            ));
        }
        if self.0 > MAX_ORDER_AMOUNT {
            return Err(DomainError::invalid_value(
                "money",
                format!("Order amount exceeds maximum: ${MAX_ORDER_AMOUNT}"),
            ));
        }
        Ok(())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_new_and_display() {
        let m = Money::new(dec!(150.50));
        assert_eq!(format!("{m}"), "$150.50");
    }

    #[test]
    fn money_from_cents() {
        let m = Money::from_cents(1000);
        assert_eq!(m.amount(), dec!(10.00));
        assert_eq!(format!("{m}"), "$10.00");
    }

    #[test]
    fn money_round() {
        let m = Money::new(dec!(150.555));
        assert_eq!(m.round().amount(), dec!(150.56));
    }

    #[test]
    fn money_scales_by_decimal() {
        let a = Money::new(dec!(100));
        assert_eq!((a * dec!(3)).amount(), dec!(300));
    }

    #[test]
    fn money_ordering() {
        assert!(Money::new(dec!(100)) > Money::new(dec!(50)));
        assert_eq!(Money::from_cents(10_000), Money::new(dec!(100)));
    }

    #[test]
    fn money_validate_for_order() {
        assert!(Money::new(dec!(-1)).validate_for_order().is_err());
        assert!(Money::new(dec!(20_000_000)).validate_for_order().is_err());
        assert!(Money::new(dec!(10_000_000)).validate_for_order().is_ok());
        assert!(Money::ZERO.validate_for_order().is_ok());
    }

    #[test]
    fn money_serializes_as_string() {
        let json = serde_json::to_string(&Money::new(dec!(10.00))).unwrap();
        assert_eq!(json, "\"10.00\"");
    }
}
