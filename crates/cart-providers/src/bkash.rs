//! # Bkash
//!
//! Simulated Bkash mobile-wallet provider. Accepts every authorized amount
//! and confirms with `Paid With Bkash: <amount>`.

use crate::config::ProviderConfig;
use async_trait::async_trait;
use cart_core::{CartResult, PaymentProvider, PaymentReceipt, Price};
use tracing::{info, instrument};

pub struct BkashProvider {
    config: ProviderConfig,
}

impl BkashProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Create from environment variables (`BKASH_TRANSACTION_LIMIT`)
    pub fn from_env() -> CartResult<Self> {
        Ok(Self::new(ProviderConfig::from_env("Bkash", "BKASH")?))
    }
}

impl Default for BkashProvider {
    fn default() -> Self {
        Self::new(ProviderConfig::new("Bkash"))
    }
}

#[async_trait]
impl PaymentProvider for BkashProvider {
    #[instrument(skip(self, amount), fields(amount = %amount))]
    async fn pay(&self, amount: &Price) -> CartResult<PaymentReceipt> {
        self.config.authorize(self.provider_name(), amount)?;

        let message = format!("Paid With {}: {}", self.config.label, amount);
        let receipt = PaymentReceipt::new(self.provider_name(), *amount, message);

        info!(transaction_id = %receipt.transaction_id, "Bkash payment accepted");
        Ok(receipt)
    }

    fn provider_name(&self) -> &'static str {
        "bkash"
    }

    fn label(&self) -> &str {
        &self.config.label
    }
}
