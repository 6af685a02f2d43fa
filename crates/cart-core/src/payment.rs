//! # Payment Provider Trait
//!
//! Strategy trait for payment providers.
//! Implementations: Bkash, Stripe, and test doubles.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaymentProvider (trait)                   │
//! │  ├── pay()                                                  │
//! │  ├── provider_name()                                        │
//! │  └── label()                                                │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                  ┌─────────┴─────────┐
//!                  │                   │
//!          ┌───────┴───────┐   ┌───────┴───────┐
//!          │ BkashProvider │   │StripeProvider │
//!          └───────────────┘   └───────────────┘
//! ```

use crate::error::{CartError, CartResult};
use crate::price::Price;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

/// Core trait for payment provider implementations.
///
/// Providers carry no per-call state, so one instance can be shared by any
/// number of carts.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Charge `amount` and return a receipt.
    ///
    /// A refused charge is reported as `CartError::PaymentDeclined`.
    async fn pay(&self, amount: &Price) -> CartResult<PaymentReceipt>;

    /// Routing key (e.g. "bkash")
    fn provider_name(&self) -> &'static str;

    /// Human-readable label used in confirmations (e.g. "Bkash")
    fn label(&self) -> &str;
}

/// Type alias for a shared payment provider (dynamic dispatch)
pub type BoxedPaymentProvider = Arc<dyn PaymentProvider>;

/// Proof of a completed payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Generated transaction id
    pub transaction_id: String,
    /// Provider routing key
    pub provider: String,
    /// Amount charged
    pub amount: Price,
    /// Confirmation line shown to the customer
    pub message: String,
    pub paid_at: DateTime<Utc>,
}

impl PaymentReceipt {
    pub fn new(provider: impl Into<String>, amount: Price, message: impl Into<String>) -> Self {
        Self {
            transaction_id: Uuid::new_v4().to_string(),
            provider: provider.into(),
            amount,
            message: message.into(),
            paid_at: Utc::now(),
        }
    }
}

/// Payment providers keyed by provider name, iterated in name order
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, BoxedPaymentProvider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payment provider under its `provider_name`,
    /// replacing any earlier one with the same name
    pub fn register(&mut self, provider: BoxedPaymentProvider) {
        let name = provider.provider_name().to_string();
        self.providers.insert(name, provider);
    }

    /// Register with builder pattern
    pub fn with_provider(mut self, provider: BoxedPaymentProvider) -> Self {
        self.register(provider);
        self
    }

    /// Get a provider by name
    pub fn get(&self, provider: &str) -> Option<&BoxedPaymentProvider> {
        self.providers.get(provider)
    }

    /// Get a shared handle to a provider, failing with `ProviderNotFound`
    pub fn resolve(&self, provider: &str) -> CartResult<BoxedPaymentProvider> {
        self.get(provider)
            .cloned()
            .ok_or_else(|| CartError::ProviderNotFound {
                provider: provider.to_string(),
            })
    }

    /// Registered provider names
    pub fn providers(&self) -> Vec<&str> {
        self.providers.keys().map(|s| s.as_str()).collect()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers())
            .finish()
    }
}
