//! # Product Types
//!
//! Products and the in-memory product catalog.
//! Catalogs can be loaded from `config/products.toml`.

use crate::error::{CartError, CartResult};
use crate::price::{Currency, Price};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A product with its remaining stock.
///
/// Name, price, and stock are only reachable through accessors; stock only
/// changes through [`Product::reduce_stock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Externally visible product identifier
    pub id: u32,
    name: String,
    price: Price,
    stock: u32,
}

impl Product {
    /// Create a new product.
    ///
    /// Rejects an empty name or a negative price.
    pub fn new(id: u32, name: impl Into<String>, price: Price, stock: u32) -> CartResult<Self> {
        let product = Self {
            id,
            name: name.into(),
            price,
            stock,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> CartResult<()> {
        if self.name.trim().is_empty() {
            return Err(CartError::InvalidInput(format!(
                "product {} has an empty name",
                self.id
            )));
        }
        if self.price.is_negative() {
            return Err(CartError::InvalidInput(format!(
                "product {} has a negative price: {}",
                self.id, self.price
            )));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn currency(&self) -> Currency {
        self.price.currency
    }

    /// Remove `amount` units from stock.
    ///
    /// Fails with `InsufficientStock` and leaves stock untouched when
    /// `amount` exceeds what is left.
    pub fn reduce_stock(&mut self, amount: u32) -> CartResult<()> {
        if amount > self.stock {
            debug!(
                product_id = self.id,
                requested = amount,
                available = self.stock,
                "stock reduction rejected"
            );
            return Err(CartError::InsufficientStock {
                product_id: self.id,
                name: self.name.clone(),
                requested: amount,
                available: self.stock,
            });
        }
        self.stock -= amount;
        debug!(product_id = self.id, remaining = self.stock, "stock reduced");
        Ok(())
    }

    /// Boolean form of [`Product::reduce_stock`]
    pub fn try_reduce_stock(&mut self, amount: u32) -> bool {
        self.reduce_stock(amount).is_ok()
    }

    /// Check if any stock is left
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Product catalog (seeded in code or loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// The built-in demo catalog
    pub fn seed() -> CartResult<Self> {
        let mut catalog = Self::new();
        catalog.add(Product::new(
            1,
            "Shirt",
            Price::new(500.0, Currency::BDT),
            10,
        )?)?;
        catalog.add(Product::new(
            2,
            "Pant",
            Price::new(800.0, Currency::BDT),
            5,
        )?)?;
        Ok(catalog)
    }

    /// Add a product to the catalog. Ids must be unique and every product
    /// must share the currency of the first one.
    pub fn add(&mut self, product: Product) -> CartResult<()> {
        if self.get(product.id).is_some() {
            return Err(CartError::InvalidInput(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        if let Some(currency) = self.currency() {
            if product.currency() != currency {
                return Err(CartError::CurrencyMismatch {
                    expected: currency.to_string(),
                    actual: product.currency().to_string(),
                });
            }
        }
        self.products.push(product);
        Ok(())
    }

    /// Find a product by ID
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a product by ID for stock changes
    pub fn get_mut(&mut self, id: u32) -> CartResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CartError::ProductNotFound { product_id: id })
    }

    /// All products in catalog order
    pub fn find_all(&self) -> &[Product] {
        &self.products
    }

    /// Currency shared by all products; `None` for an empty catalog
    pub fn currency(&self) -> Option<Currency> {
        self.products.first().map(Product::currency)
    }

    /// Product ids in catalog order
    pub fn ids(&self) -> Vec<u32> {
        self.products.iter().map(|p| p.id).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Load catalog from TOML string, validating every entry
    pub fn from_toml(toml_str: &str) -> CartResult<Self> {
        let raw: ProductCatalog = toml::from_str(toml_str)
            .map_err(|e| CartError::Configuration(format!("invalid catalog: {}", e)))?;

        let mut catalog = Self::new();
        for product in raw.products {
            product.validate()?;
            catalog.add(product)?;
        }
        Ok(catalog)
    }
}
