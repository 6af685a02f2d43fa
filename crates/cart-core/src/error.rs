//! # Cart Error Types
//!
//! Typed error handling for the checkout-cart engine.
//! All cart, product, and payment operations return `Result<T, CartError>`.

use thiserror::Error;

/// Core error type for all cart operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Not enough stock left to satisfy the request
    #[error("Out of stock: {name} (requested {requested}, available {available})")]
    InsufficientStock {
        product_id: u32,
        name: String,
        requested: u32,
        available: u32,
    },

    /// Payment was declined by the provider
    #[error("Payment declined by {provider}: {reason}")]
    PaymentDeclined { provider: String, reason: String },

    /// Invalid input (negative price, empty name, zero quantity, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Item currency does not match the cart currency
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    /// Cart was already checked out
    #[error("Cart {cart_id} is already settled")]
    AlreadySettled { cart_id: String },

    /// Product not found in catalog
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: u32 },

    /// No payment provider registered under this name
    #[error("Payment provider not found: {provider}")]
    ProviderNotFound { provider: String },

    /// Configuration errors (bad env value, unparseable catalog)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CartError {
    /// Returns true for the outcomes that are normal control flow
    /// rather than faults (the caller can carry on with the cart).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CartError::InsufficientStock { .. } | CartError::PaymentDeclined { .. }
        )
    }
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(CartError::InsufficientStock {
            product_id: 3,
            name: "Hat".into(),
            requested: 1,
            available: 0,
        }
        .is_recoverable());
        assert!(CartError::PaymentDeclined {
            provider: "stripe".into(),
            reason: "limit".into()
        }
        .is_recoverable());
        assert!(!CartError::InvalidInput("bad".into()).is_recoverable());
        assert!(!CartError::AlreadySettled {
            cart_id: "c1".into()
        }
        .is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = CartError::InsufficientStock {
            product_id: 3,
            name: "Hat".into(),
            requested: 1,
            available: 0,
        };
        assert_eq!(
            err.to_string(),
            "Out of stock: Hat (requested 1, available 0)"
        );

        let err = CartError::PaymentDeclined {
            provider: "bkash".into(),
            reason: "over limit".into(),
        };
        assert_eq!(err.to_string(), "Payment declined by bkash: over limit");
    }
}
