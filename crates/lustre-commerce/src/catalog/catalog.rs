//! The static, read-only product catalog.

use std::collections::HashSet;

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// Price ceiling of the "under 5,000" home page shelf.
pub const UNDER_PRICE_THRESHOLD: i64 = 5000;

/// Default number of related products shown on a product page.
pub const RELATED_LIMIT: usize = 4;

const JEWELLERY_DATASET: &str = include_str!("../../data/catalog.json");

/// Products and categories supplied at build time.
///
/// The catalog is only ever read: lookups by id and full iteration. Product
/// order is the "featured" order of the listing page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product or category ids.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        if let Some(dup) = products.iter().find(|p| !seen.insert(&p.id)) {
            return Err(CommerceError::ValidationError(format!(
                "duplicate product id {}",
                dup.id
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = categories.iter().find(|c| !seen.insert(&c.id)) {
            return Err(CommerceError::ValidationError(format!(
                "duplicate category id {}",
                dup.id
            )));
        }

        Ok(Self {
            categories,
            products,
        })
    }

    /// Parse a catalog from its JSON form (`{"categories": [...], "products": [...]}`).
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            categories: Vec<Category>,
            products: Vec<Product>,
        }

        let raw: Raw = serde_json::from_str(json)?;
        Self::new(raw.categories, raw.products)
    }

    /// The bundled jewellery collection.
    pub fn jewellery() -> Result<Self, CommerceError> {
        let catalog = Self::from_json(JEWELLERY_DATASET)?;
        tracing::debug!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "loaded bundled catalog"
        );
        Ok(catalog)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn require_product(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.product(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a category by id, failing with `CategoryNotFound`.
    pub fn require_category(&self, id: &CategoryId) -> Result<&Category, CommerceError> {
        self.category(id)
            .ok_or_else(|| CommerceError::CategoryNotFound(id.to_string()))
    }

    /// Products in the same category as `product`, excluding it, in catalog order.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Products flagged as best sellers.
    pub fn best_sellers(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_best_seller).collect()
    }

    /// Products flagged as new arrivals.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// Products priced strictly below `threshold`.
    pub fn under_price(&self, threshold: i64) -> Vec<&Product> {
        self.products.iter().filter(|p| p.price < threshold).collect()
    }
}
