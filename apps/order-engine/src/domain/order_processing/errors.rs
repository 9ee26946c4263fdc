//! Order processing errors.

use std::fmt;

use crate::domain::shared::DomainError;

/// Errors that make an order unfit for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Invalid order parameters.
    InvalidParameters {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// The referenced item cannot be priced for an order.
    InvalidItem {
        /// SKU of the offending item.
        sku: String,
        /// Error message.
        message: String,
    },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { field, message } => {
                write!(f, "Invalid order parameter '{field}': {message}")
            }
            Self::InvalidItem { sku, message } => {
                write!(f, "Invalid item '{sku}': {message}")
            }
        }
    }
}

impl std::error::Error for OrderError {}

impl From<DomainError> for OrderError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidValue { field, message } => {
                Self::InvalidParameters { field, message }
            }
            DomainError::BusinessRuleViolation { rule, message } => Self::InvalidParameters {
                field: rule,
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_item_display() {
        let err = OrderError::InvalidItem {
            sku: "SKU-1".to_string(),
            message: "price is negative".to_string(),
        };
        assert_eq!(format!("{err}"), "Invalid item 'SKU-1': price is negative");
    }

    #[test]
    fn converts_from_domain_error() {
        let err: OrderError = DomainError::invalid_value("quantity", "must be positive").into();
        assert_eq!(
            err,
            OrderError::InvalidParameters {
                field: "quantity".to_string(),
                message: "must be positive".to_string(),
            }
        );
    }
}
