//! # Stripe
//!
//! Simulated card provider. No API calls are made; the confirmation line is
//! `Paid with Stripe: <amount>`.

use crate::config::ProviderConfig;
use async_trait::async_trait;
use cart_core::{CartResult, PaymentProvider, PaymentReceipt, Price};
use tracing::{info, instrument};

pub struct StripeProvider {
    config: ProviderConfig,
}

impl StripeProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Create from environment variables (`STRIPE_TRANSACTION_LIMIT`)
    pub fn from_env() -> CartResult<Self> {
        Ok(Self::new(ProviderConfig::from_env("Stripe", "STRIPE")?))
    }
}

impl Default for StripeProvider {
    fn default() -> Self {
        Self::new(ProviderConfig::new("Stripe"))
    }
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    #[instrument(skip(self, amount), fields(amount = %amount))]
    async fn pay(&self, amount: &Price) -> CartResult<PaymentReceipt> {
        self.config.authorize(self.provider_name(), amount)?;

        let message = format!("Paid with {}: {}", self.config.label, amount);
        let receipt = PaymentReceipt::new(self.provider_name(), *amount, message);

        info!(transaction_id = %receipt.transaction_id, "Stripe payment accepted");
        Ok(receipt)
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }

    fn label(&self) -> &str {
        &self.config.label
    }
}
