//! Product records and the loaded catalog.
//!
//! ERROR HANDLING
//! ==============
//! A failed load never reaches the view: `finish_load` logs the error,
//! clears the loading flag, and leaves the product list empty.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single catalog entry as served by `products.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(rename = "priceText", default, skip_serializing_if = "Option::is_none")]
    pub price_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a catalog body: a JSON array of product objects.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the body is not an array of products.
pub fn parse_catalog(raw: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

/// The session catalog plus its loading flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub loading: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self { products: Vec::new(), loading: true }
    }
}

impl CatalogState {
    /// Catalog that is already loaded with `products`.
    #[must_use]
    pub fn loaded(products: Vec<Product>) -> Self {
        Self { products, loading: false }
    }

    /// Apply the outcome of the single startup fetch.
    pub fn finish_load<E: Display>(&mut self, result: Result<Vec<Product>, E>) {
        match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "catalog loaded");
                self.products = products;
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog load failed; showing empty grid");
            }
        }
        self.loading = false;
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
