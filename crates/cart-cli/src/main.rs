//! # checkout-cart
//!
//! ```bash
//! # Pay for the built-in catalog with Bkash
//! checkout-cart
//!
//! # Pay with Stripe, verbose logs on stderr
//! CART_PROVIDER=stripe RUST_LOG=info checkout-cart
//! ```

use cart_cli::{run_checkout, AppConfig};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    init_logging(config.json_logs);

    let registry = cart_providers::default_registry()?;
    let provider = registry.resolve(&config.provider)?;

    let mut catalog = config.load_catalog()?;
    info!(
        "Provider: {}, products loaded: {}",
        provider.provider_name(),
        catalog.len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let receipt = run_checkout(&mut catalog, provider, &mut out).await?;

    info!(transaction_id = %receipt.transaction_id, "Checkout complete");
    Ok(())
}

/// Logs go to stderr so stdout carries only the transcript.
fn init_logging(json: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();

    if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}
