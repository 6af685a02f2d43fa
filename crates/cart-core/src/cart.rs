//! # Cart
//!
//! The cart holds snapshot copies of added products and one bound payment
//! provider. It is `Open` until a successful checkout moves it to `Settled`.

use crate::error::{CartError, CartResult};
use crate::payment::{BoxedPaymentProvider, PaymentReceipt};
use crate::price::{Currency, Price};
use crate::product::Product;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// A line in the cart, copied from the product at the moment it was added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product ID
    pub product_id: u32,

    /// Product name (denormalized for display)
    pub name: String,

    /// Unit price
    pub unit_price: Price,

    /// Quantity
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item from a product
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
        }
    }

    /// Calculate the total price for this line item
    pub fn total(&self) -> CartResult<Price> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// Lifecycle state of a cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartStatus {
    /// Accepting items
    Open,
    /// Paid; no further changes
    Settled,
}

impl Default for CartStatus {
    fn default() -> Self {
        CartStatus::Open
    }
}

/// Shopping cart bound to a payment provider
pub struct Cart {
    id: String,
    items: Vec<LineItem>,
    provider: BoxedPaymentProvider,
    currency: Currency,
    status: CartStatus,
}

impl Cart {
    /// Create an empty cart in the default currency
    pub fn new(provider: BoxedPaymentProvider) -> Self {
        Self::with_currency(provider, Currency::default())
    }

    /// Create an empty cart in a given currency
    pub fn with_currency(provider: BoxedPaymentProvider, currency: Currency) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            items: Vec::new(),
            provider,
            currency,
            status: CartStatus::Open,
        }
    }

    /// Add one unit of `product`, taking it from the product's stock.
    pub fn add_item(&mut self, product: &mut Product) -> CartResult<LineItem> {
        self.add_quantity(product, 1)
    }

    /// Add `quantity` units of `product` as a single line and return a copy
    /// of the new line.
    ///
    /// Stock is only reduced once every other check has passed; a failed
    /// reduction leaves both the product and the cart unchanged.
    #[instrument(skip(self, product), fields(cart_id = %self.id, product_id = product.id))]
    pub fn add_quantity(&mut self, product: &mut Product, quantity: u32) -> CartResult<LineItem> {
        self.ensure_open()?;

        if quantity == 0 {
            return Err(CartError::InvalidInput(
                "quantity must be at least 1".to_string(),
            ));
        }
        if product.currency() != self.currency {
            return Err(CartError::CurrencyMismatch {
                expected: self.currency.to_string(),
                actual: product.currency().to_string(),
            });
        }

        if let Err(err) = product.reduce_stock(quantity) {
            warn!("Out of stock: {}", product.name());
            return Err(err);
        }

        let line = LineItem::from_product(product, quantity);
        self.items.push(line.clone());
        info!("Added {} x {}", quantity, product.name());

        Ok(line)
    }

    /// Sum of all line totals, in insertion order
    pub fn total(&self) -> CartResult<Price> {
        self.items
            .iter()
            .try_fold(Price::zero(self.currency), |acc, item| {
                acc.checked_add(&item.total()?)
            })
    }

    /// Pay the cart total through the bound provider.
    ///
    /// On success the cart becomes `Settled`. A payment error is returned
    /// as-is and the cart stays `Open`.
    #[instrument(skip(self), fields(cart_id = %self.id, provider = self.provider.provider_name()))]
    pub async fn checkout(&mut self) -> CartResult<PaymentReceipt> {
        self.ensure_open()?;

        let total = self.total()?;
        debug!("Checking out {} lines, total {}", self.items.len(), total.display());

        match self.provider.pay(&total).await {
            Ok(receipt) => {
                self.status = CartStatus::Settled;
                info!(transaction_id = %receipt.transaction_id, "Cart settled");
                Ok(receipt)
            }
            Err(err) => {
                warn!("Payment failed: {}", err);
                Err(err)
            }
        }
    }

    fn ensure_open(&self) -> CartResult<()> {
        match self.status {
            CartStatus::Open => Ok(()),
            CartStatus::Settled => Err(CartError::AlreadySettled {
                cart_id: self.id.clone(),
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn status(&self) -> CartStatus {
        self.status
    }

    pub fn is_settled(&self) -> bool {
        self.status == CartStatus::Settled
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("provider", &self.provider.provider_name())
            .field("currency", &self.currency)
            .field("status", &self.status)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::PaymentProvider;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingProvider {
        calls: Mutex<Vec<Price>>,
    }

    impl RecordingProvider {
        fn calls(&self) -> Vec<Price> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentProvider for RecordingProvider {
        async fn pay(&self, amount: &Price) -> CartResult<PaymentReceipt> {
            self.calls.lock().unwrap().push(*amount);
            Ok(PaymentReceipt::new("recording", *amount, format!("Recorded: {}", amount)))
        }

        fn provider_name(&self) -> &'static str {
            "recording"
        }

        fn label(&self) -> &str {
            "Recording"
        }
    }

    struct DecliningProvider;

    #[async_trait]
    impl PaymentProvider for DecliningProvider {
        async fn pay(&self, _amount: &Price) -> CartResult<PaymentReceipt> {
            Err(CartError::PaymentDeclined {
                provider: "declining".into(),
                reason: "card refused".into(),
            })
        }

        fn provider_name(&self) -> &'static str {
            "declining"
        }

        fn label(&self) -> &str {
            "Declining"
        }
    }

    fn bdt(amount: f64) -> Price {
        Price::new(amount, Currency::BDT)
    }

    #[tokio::test]
    async fn test_shirt_and_pant_checkout() {
        let provider = Arc::new(RecordingProvider::default());
        let mut cart = Cart::new(provider.clone());

        let mut shirt = Product::new(1, "Shirt", bdt(500.0), 10).unwrap();
        let mut pant = Product::new(2, "Pant", bdt(800.0), 5).unwrap();

        cart.add_item(&mut shirt).unwrap();
        assert_eq!(shirt.stock(), 9);
        assert_eq!(cart.len(), 1);

        cart.add_item(&mut pant).unwrap();
        assert_eq!(pant.stock(), 4);
        assert_eq!(cart.len(), 2);

        let receipt = cart.checkout().await.unwrap();
        assert_eq!(receipt.amount, bdt(1300.0));
        assert_eq!(provider.calls(), vec![bdt(1300.0)]);
        assert!(cart.is_settled());
    }

    #[test]
    fn test_out_of_stock_not_added() {
        let mut cart = Cart::new(Arc::new(RecordingProvider::default()));
        let mut hat = Product::new(3, "Hat", bdt(200.0), 0).unwrap();

        let err = cart.add_item(&mut hat).unwrap_err();
        assert!(matches!(err, CartError::InsufficientStock { product_id: 3, .. }));
        assert!(cart.is_empty());
        assert_eq!(hat.stock(), 0);
    }

    #[test]
    fn test_line_count_matches_successful_adds() {
        let mut cart = Cart::new(Arc::new(RecordingProvider::default()));
        let mut pant = Product::new(2, "Pant", bdt(800.0), 2).unwrap();

        let results: Vec<bool> = (0..4).map(|_| cart.add_item(&mut pant).is_ok()).collect();

        assert_eq!(results, vec![true, true, false, false]);
        assert_eq!(cart.len(), 2);
        assert_eq!(pant.stock(), 0);
    }

    #[test]
    fn test_cart_keeps_snapshot() {
        let mut cart = Cart::new(Arc::new(RecordingProvider::default()));
        let mut shirt = Product::new(1, "Shirt", bdt(500.0), 10).unwrap();

        let line = cart.add_item(&mut shirt).unwrap();
        assert_eq!(cart.items(), &[line]);
        shirt.reduce_stock(9).unwrap();

        assert_eq!(cart.items()[0].name, "Shirt");
        assert_eq!(cart.items()[0].unit_price, bdt(500.0));
        assert_eq!(cart.total().unwrap(), bdt(500.0));
    }

    #[test]
    fn test_total_independent_of_order() {
        let mut a = Product::new(1, "A", bdt(12.5), 5).unwrap();
        let mut b = Product::new(2, "B", bdt(7.25), 5).unwrap();
        let mut c = Product::new(3, "C", bdt(100.0), 5).unwrap();

        let mut forward = Cart::new(Arc::new(RecordingProvider::default()));
        forward.add_item(&mut a).unwrap();
        forward.add_item(&mut b).unwrap();
        forward.add_item(&mut c).unwrap();

        let mut backward = Cart::new(Arc::new(RecordingProvider::default()));
        backward.add_item(&mut c).unwrap();
        backward.add_item(&mut b).unwrap();
        backward.add_item(&mut a).unwrap();

        assert_eq!(forward.total().unwrap(), backward.total().unwrap());
        assert_eq!(forward.total().unwrap(), bdt(119.75));
    }

    #[tokio::test]
    async fn test_empty_cart_pays_zero() {
        let provider = Arc::new(RecordingProvider::default());
        let mut cart = Cart::new(provider.clone());

        let receipt = cart.checkout().await.unwrap();

        assert_eq!(receipt.amount, Price::zero(Currency::BDT));
        assert_eq!(provider.calls(), vec![Price::zero(Currency::BDT)]);
    }

    #[tokio::test]
    async fn test_settled_cart_rejects_changes() {
        let provider = Arc::new(RecordingProvider::default());
        let mut cart = Cart::new(provider.clone());
        let mut shirt = Product::new(1, "Shirt", bdt(500.0), 10).unwrap();

        cart.add_item(&mut shirt).unwrap();
        cart.checkout().await.unwrap();

        assert!(matches!(
            cart.add_item(&mut shirt),
            Err(CartError::AlreadySettled { .. })
        ));
        assert_eq!(shirt.stock(), 9);

        assert!(matches!(
            cart.checkout().await,
            Err(CartError::AlreadySettled { .. })
        ));
        assert_eq!(provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_declined_payment_surfaces() {
        let mut cart = Cart::new(Arc::new(DecliningProvider));
        let mut shirt = Product::new(1, "Shirt", bdt(500.0), 10).unwrap();
        cart.add_item(&mut shirt).unwrap();

        let err = cart.checkout().await.unwrap_err();

        assert!(matches!(err, CartError::PaymentDeclined { .. }));
        assert_eq!(cart.status(), CartStatus::Open);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_quantity() {
        let mut cart = Cart::new(Arc::new(RecordingProvider::default()));
        let mut shirt = Product::new(1, "Shirt", bdt(500.0), 10).unwrap();

        let line = cart.add_quantity(&mut shirt, 3).unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(shirt.stock(), 7);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total().unwrap(), bdt(1500.0));

        assert!(matches!(
            cart.add_quantity(&mut shirt, 0),
            Err(CartError::InvalidInput(_))
        ));
        assert!(matches!(
            cart.add_quantity(&mut shirt, 8),
            Err(CartError::InsufficientStock { requested: 8, available: 7, .. })
        ));
        assert_eq!(shirt.stock(), 7);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_currency_mismatch_leaves_stock() {
        let mut cart = Cart::with_currency(Arc::new(RecordingProvider::default()), Currency::USD);
        let mut shirt = Product::new(1, "Shirt", bdt(500.0), 10).unwrap();

        assert!(matches!(
            cart.add_item(&mut shirt),
            Err(CartError::CurrencyMismatch { .. })
        ));
        assert_eq!(shirt.stock(), 10);
        assert!(cart.is_empty());
    }
}
