//! # Checkout Flow
//!
//! The scripted run: add every catalog product once, then check out.
//! Each step writes one transcript line. The cart uses the catalog's
//! currency.

use cart_core::{BoxedPaymentProvider, Cart, CartError, PaymentReceipt, ProductCatalog};
use std::io::Write;
use tracing::{info, instrument};

/// Run the scripted checkout, writing the transcript to `out`.
#[instrument(skip_all, fields(provider = provider.provider_name(), products = catalog.len()))]
pub async fn run_checkout<W: Write>(
    catalog: &mut ProductCatalog,
    provider: BoxedPaymentProvider,
    out: &mut W,
) -> anyhow::Result<PaymentReceipt> {
    let mut cart = match catalog.currency() {
        Some(currency) => Cart::with_currency(provider, currency),
        None => Cart::new(provider),
    };
    info!(cart_id = cart.id(), "Cart opened");

    for id in catalog.ids() {
        let product = catalog.get_mut(id)?;
        match cart.add_item(product) {
            Ok(line) => writeln!(out, "Added: {}", line.name)?,
            Err(CartError::InsufficientStock { name, .. }) => writeln!(out, "Out of stock: {}", name)?,
            Err(err) => return Err(err.into()),
        }
    }

    let receipt = cart.checkout().await?;
    writeln!(out, "{}", receipt.message)?;

    Ok(receipt)
}
