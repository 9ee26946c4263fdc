//! Priceable items.
//!
//! `Order` depends on [`Priceable`] only. Adding a product kind means adding a
//! type that implements it.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::shared::{DomainError, Money, Sku};

/// Capability of reporting a price.
pub trait Priceable: fmt::Debug + Send + Sync {
    /// Stock keeping unit recorded with the order.
    fn sku(&self) -> &Sku;

    /// Current unit price.
    fn price(&self) -> Money;
}

/// A catalog product with a fixed unit price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    sku: Sku,
    name: String,
    price: Money,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(sku: impl Into<Sku>, name: impl Into<String>, price: Money) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Priceable for Product {
    fn sku(&self) -> &Sku {
        &self.sku
    }

    fn price(&self) -> Money {
        self.price
    }
}

/// Any priceable item sold at a percentage off.
#[derive(Debug, Clone)]
pub struct DiscountedProduct {
    inner: Arc<dyn Priceable>,
    percent_off: Decimal,
}

impl DiscountedProduct {
    /// Wrap `inner` with a discount expressed in percent (0 to 100).
    ///
    /// # Errors
    ///
    /// Returns error if the discount is outside `0..=100`.
    pub fn new(inner: Arc<dyn Priceable>, percent_off: Decimal) -> Result<Self, DomainError> {
        if percent_off < Decimal::ZERO || percent_off > Decimal::ONE_HUNDRED {
            return Err(DomainError::BusinessRuleViolation {
                rule: "DISCOUNT_RANGE".to_string(),
                message: format!("Discount must be between 0 and 100 percent, got {percent_off}"),
            });
        }
        Ok(Self { inner, percent_off })
    }

    /// Discount in percent.
    #[must_use]
    pub const fn percent_off(&self) -> Decimal {
        self.percent_off
    }
}

impl Priceable for DiscountedProduct {
    fn sku(&self) -> &Sku {
        self.inner.sku()
    }

    fn price(&self) -> Money {
        let factor = (Decimal::ONE_HUNDRED - self.percent_off) / Decimal::ONE_HUNDRED;
        (self.inner.price() * factor).round()
    }
}
