//! # Provider Configuration
//!
//! Per-provider settings, loaded from environment variables.

use cart_core::{CartError, CartResult, Price};
use std::env;

/// Settings shared by the simulated providers
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Label shown in confirmations (e.g. "Bkash")
    pub label: String,

    /// Largest amount, in whole major units (taka, dollars), a single
    /// payment may charge. `None` means every payment is accepted.
    pub transaction_limit: Option<i64>,
}

impl ProviderConfig {
    /// Config with no transaction limit
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            transaction_limit: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Optional env var:
    /// - `<PREFIX>_TRANSACTION_LIMIT` (whole major units, e.g. `1000`)
    pub fn from_env(label: impl Into<String>, prefix: &str) -> CartResult<Self> {
        dotenvy::dotenv().ok();

        let key = format!("{}_TRANSACTION_LIMIT", prefix);
        let transaction_limit = match env::var(&key) {
            Ok(raw) => Some(parse_limit(&key, &raw)?),
            Err(_) => None,
        };

        Ok(Self {
            label: label.into(),
            transaction_limit,
        })
    }

    /// Builder: set a transaction limit
    pub fn with_transaction_limit(mut self, limit: i64) -> Self {
        self.transaction_limit = Some(limit);
        self
    }

    /// Check an amount against this provider's rules.
    pub fn authorize(&self, provider: &str, amount: &Price) -> CartResult<()> {
        if amount.is_negative() {
            return Err(CartError::InvalidInput(format!(
                "payment amount must not be negative: {}",
                amount
            )));
        }

        if let Some(limit) = self.transaction_limit {
            let scale = 10_i64.pow(u32::from(amount.currency.decimal_places()));
            let limit_minor = limit.saturating_mul(scale);
            if amount.amount > limit_minor {
                return Err(CartError::PaymentDeclined {
                    provider: provider.to_string(),
                    reason: format!(
                        "amount {} exceeds transaction limit {}",
                        amount,
                        Price::from_minor(limit_minor, amount.currency)
                    ),
                });
            }
        }

        Ok(())
    }
}

fn parse_limit(key: &str, raw: &str) -> CartResult<i64> {
    let limit: i64 = raw.trim().parse().map_err(|_| {
        CartError::Configuration(format!("{} must be a whole number, got {:?}", key, raw))
    })?;

    if limit < 0 {
        return Err(CartError::Configuration(format!(
            "{} must be a non-negative number, got {:?}",
            key, raw
        )));
    }
    Ok(limit)
}
