//! # Money Types
//!
//! Currency and price types. Amounts are held in the smallest currency unit
//! (poisha for BDT, cents for USD) so sums are exact.

use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    BDT,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::BDT => "bdt",
            Currency::USD => "usd",
            Currency::EUR => "eur",
            Currency::GBP => "gbp",
            Currency::JPY => "jpy",
        }
    }

    /// Returns the number of decimal places for this currency
    /// (JPY has 0 decimals, the others have 2)
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Convert a decimal amount to the smallest currency unit
    pub fn to_smallest_unit(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.decimal_places() as i32);
        (amount * multiplier).round() as i64
    }

    /// Convert from smallest unit back to decimal
    pub fn from_smallest_unit(&self, amount: i64) -> f64 {
        let divisor = 10_f64.powi(self.decimal_places() as i32);
        amount as f64 / divisor
    }

    fn symbol(&self) -> &'static str {
        match self {
            Currency::BDT => "৳",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::BDT
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Price with amount in smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in smallest currency unit
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Price {
    /// Create a new price from decimal amount
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount: currency.to_smallest_unit(amount),
            currency,
        }
    }

    /// Create a price from smallest unit
    pub fn from_minor(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.currency.from_smallest_unit(self.amount)
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Add two prices of the same currency
    pub fn checked_add(&self, other: &Price) -> CartResult<Price> {
        if self.currency != other.currency {
            return Err(CartError::CurrencyMismatch {
                expected: self.currency.to_string(),
                actual: other.currency.to_string(),
            });
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| CartError::InvalidInput("price overflow".to_string()))?;
        Ok(Price::from_minor(amount, self.currency))
    }

    /// Multiply by a quantity
    pub fn checked_mul(&self, quantity: u32) -> CartResult<Price> {
        let amount = self
            .amount
            .checked_mul(i64::from(quantity))
            .ok_or_else(|| CartError::InvalidInput("price overflow".to_string()))?;
        Ok(Price::from_minor(amount, self.currency))
    }

    /// Format with currency symbol (e.g., "৳1300.00")
    pub fn display(&self) -> String {
        let symbol = self.currency.symbol();
        if self.currency.decimal_places() == 0 {
            format!("{}{}", symbol, self.amount)
        } else {
            format!("{}{:.2}", symbol, self.as_decimal())
        }
    }
}

/// Plain decimal amount with trailing fractional zeros trimmed
/// ("1300", "12.5"), as shown in payment confirmations.
impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let places = u32::from(self.currency.decimal_places());
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        if places == 0 {
            return write!(f, "{}{}", sign, abs);
        }

        let divisor = 10_u64.pow(places);
        let whole = abs / divisor;
        let frac = abs % divisor;
        if frac == 0 {
            return write!(f, "{}{}", sign, whole);
        }

        let frac = format!("{:0width$}", frac, width = places as usize);
        write!(f, "{}{}.{}", sign, whole, frac.trim_end_matches('0'))
    }
}
