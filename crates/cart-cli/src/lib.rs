//! # cart-cli
//!
//! Command-line checkout for checkout-cart.
//!
//! Runs a fixed script: load the catalog, bind the configured payment
//! provider, add every product once, check out.
//!
//! ## Environment
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CART_PROVIDER` | `bkash` | Payment provider (`bkash` or `stripe`) |
//! | `CART_CATALOG` | built-in | Path to a TOML product catalog |
//! | `CART_LOG_FORMAT` | text | `json` for JSON log lines |
//! | `BKASH_TRANSACTION_LIMIT` | none | Largest single Bkash payment |
//! | `STRIPE_TRANSACTION_LIMIT` | none | Largest single Stripe payment |
//! | `RUST_LOG` | `warn` | Log filter (logs go to stderr) |

pub mod config;
pub mod flow;

pub use config::AppConfig;
pub use flow::run_checkout;
