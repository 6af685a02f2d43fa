//! # cart-core
//!
//! Core types and traits for the checkout-cart engine.
//!
//! This crate provides:
//! - `Price` and `Currency` for exact money arithmetic
//! - `Product` and `ProductCatalog` with guarded stock
//! - `Cart` and `LineItem` for the checkout flow
//! - `PaymentProvider` trait and `ProviderRegistry`
//! - `CartError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use cart_core::{Cart, Currency, Price, Product};
//!
//! let mut shirt = Product::new(1, "Shirt", Price::new(500.0, Currency::BDT), 10)?;
//!
//! let mut cart = Cart::new(provider);
//! cart.add_item(&mut shirt)?;
//!
//! let receipt = cart.checkout().await?;
//! println!("{}", receipt.message);
//! ```

pub mod cart;
pub mod error;
pub mod payment;
pub mod price;
pub mod product;

// Re-exports for convenience
pub use cart::{Cart, CartStatus, LineItem};
pub use error::{CartError, CartResult};
pub use payment::{BoxedPaymentProvider, PaymentProvider, PaymentReceipt, ProviderRegistry};
pub use price::{Currency, Price};
pub use product::{Product, ProductCatalog};
