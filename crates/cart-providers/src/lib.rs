//! # cart-providers
//!
//! Simulated payment providers for checkout-cart.
//!
//! 1. **BkashProvider** - mobile wallet, confirms with `Paid With Bkash: <amount>`
//! 2. **StripeProvider** - card payments, confirms with `Paid with Stripe: <amount>`
//!
//! Neither talks to a real gateway. Both accept every payment unless a
//! `<PREFIX>_TRANSACTION_LIMIT` is configured and exceeded.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cart_providers::default_registry;
//!
//! let registry = default_registry()?;
//! let provider = registry.resolve("stripe")?;
//! let mut cart = Cart::new(provider);
//! ```

pub mod bkash;
pub mod config;
pub mod stripe;

// Re-exports
pub use bkash::BkashProvider;
pub use config::ProviderConfig;
pub use stripe::StripeProvider;

use cart_core::{BoxedPaymentProvider, CartResult, ProviderRegistry};
use std::sync::Arc;

/// Registry with both providers configured from the environment
pub fn default_registry() -> CartResult<ProviderRegistry> {
    Ok(ProviderRegistry::new()
        .with_provider(Arc::new(BkashProvider::from_env()?) as BoxedPaymentProvider)
        .with_provider(Arc::new(StripeProvider::from_env()?) as BoxedPaymentProvider))
}
