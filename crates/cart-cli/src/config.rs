//! # Application Config
//!
//! Environment-driven settings for the checkout binary. With nothing set,
//! the binary pays with Bkash for `config/products.toml` if one is found,
//! otherwise for the built-in catalog.

use cart_core::{CartError, ProductCatalog};
use std::path::{Path, PathBuf};

/// Catalog locations searched when `CART_CATALOG` is unset
const CATALOG_SEARCH_PATHS: [&str; 3] = [
    "config/products.toml",
    "../config/products.toml",
    "../../config/products.toml",
];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Provider routing key (`CART_PROVIDER`, default "bkash")
    pub provider: String,
    /// Catalog file (`CART_CATALOG`); `None` searches `config/products.toml`
    /// and then falls back to the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Emit JSON log lines (`CART_LOG_FORMAT=json`)
    pub json_logs: bool,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            provider: std::env::var("CART_PROVIDER")
                .ok()
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| "bkash".to_string()),
            catalog_path: std::env::var("CART_CATALOG")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            json_logs: std::env::var("CART_LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    /// Load the product catalog this config points at
    pub fn load_catalog(&self) -> anyhow::Result<ProductCatalog> {
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.load_catalog_from(&base)
    }

    /// Like [`AppConfig::load_catalog`], resolving the search paths against `base`
    pub fn load_catalog_from(&self, base: &Path) -> anyhow::Result<ProductCatalog> {
        if let Some(path) = &self.catalog_path {
            return read_catalog(path);
        }

        for candidate in CATALOG_SEARCH_PATHS {
            let path = base.join(candidate);
            if path.is_file() {
                return read_catalog(&path);
            }
        }

        tracing::debug!("No product catalog found, using built-in catalog");
        Ok(ProductCatalog::seed()?)
    }
}

fn read_catalog(path: &Path) -> anyhow::Result<ProductCatalog> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CartError::Configuration(format!("cannot read {}: {}", path.display(), e))
    })?;
    let catalog = ProductCatalog::from_toml(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
    tracing::info!("Loaded {} products from {}", catalog.len(), path.display());
    Ok(catalog)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: "bkash".to_string(),
            catalog_path: None,
            json_logs: false,
        }
    }
}
