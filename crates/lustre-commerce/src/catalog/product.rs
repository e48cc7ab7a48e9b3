//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Metal types the listing page offers as filters.
pub const METAL_TYPES: [&str; 4] = ["Gold", "Silver", "Diamond", "Steel"];

/// A product in the catalog.
///
/// Loaded once from the static dataset and never mutated. Cart and wishlist
/// entries carry a full copy so they can be rendered from storage alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Selling price in whole currency units.
    pub price: i64,
    /// Price before markdown, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    /// Primary image URL.
    pub image: String,
    /// Gallery image URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Finer grouping within the category (e.g., "engagement").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Average rating out of 5.
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Long description.
    pub description: String,
    /// Material description (e.g., "18K White Gold with Diamond").
    pub material: String,
    /// Metal type used for filtering (e.g., "Gold").
    pub metal_type: String,
    /// Display weight (e.g., "3.2g").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// New arrival flag.
    #[serde(default)]
    pub is_new: bool,
    /// Best seller flag.
    #[serde(default)]
    pub is_best_seller: bool,
    /// Whether the product can be ordered.
    pub in_stock: bool,
}

impl Product {
    /// Selling price as money.
    pub fn price_money(&self) -> Money {
        Money::inr(self.price)
    }

    /// Original price as money, if any.
    pub fn original_price_money(&self) -> Option<Money> {
        self.original_price.map(Money::inr)
    }

    /// Check if the product is marked down.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.map_or(false, |original| original > self.price)
    }

    /// Markdown as a whole percentage of the original price, rounded to the
    /// nearest integer. Zero when there is no original price.
    pub fn discount_percent(&self) -> i64 {
        match self.original_price {
            Some(original) if original > 0 => {
                let off = original - self.price;
                // Round half away from zero in integer arithmetic.
                let scaled = off * 200 / original;
                (scaled + scaled.signum()) / 2
            }
            _ => 0,
        }
    }

    /// All images, falling back to the primary image.
    pub fn gallery(&self) -> Vec<&str> {
        match &self.images {
            Some(images) if !images.is_empty() => images.iter().map(String::as_str).collect(),
            _ => vec![self.image.as_str()],
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {}", id),
        price,
        original_price: None,
        image: format!("https://img.example/{}.jpg", id),
        images: None,
        category: CategoryId::new("rings"),
        subcategory: None,
        rating: 4.5,
        reviews: 10,
        description: String::new(),
        material: "Gold".to_string(),
        metal_type: "Gold".to_string(),
        weight: None,
        is_new: false,
        is_best_seller: false,
        in_stock: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_percent() {
        let mut product = sample("1", 24999);
        assert_eq!(product.discount_percent(), 0);

        product.original_price = Some(32999);
        // 8000 / 32999 = 24.24%
        assert_eq!(product.discount_percent(), 24);

        product.price = 8999;
        product.original_price = Some(11999);
        // 3000 / 11999 = 25.002%
        assert_eq!(product.discount_percent(), 25);
    }

    #[test]
    fn test_discount_percent_rounds_half_up() {
        let mut product = sample("1", 875);
        product.original_price = Some(1000);
        // 12.5% rounds to 13
        assert_eq!(product.discount_percent(), 13);
    }

    #[test]
    fn test_on_sale() {
        let mut product = sample("1", 100);
        assert!(!product.is_on_sale());
        product.original_price = Some(100);
        assert!(!product.is_on_sale());
        product.original_price = Some(150);
        assert!(product.is_on_sale());
    }

    #[test]
    fn test_gallery_falls_back_to_image() {
        let mut product = sample("1", 100);
        assert_eq!(product.gallery(), vec!["https://img.example/1.jpg"]);

        product.images = Some(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(product.gallery(), vec!["a", "b"]);
    }

    #[test]
    fn test_dataset_field_names() {
        let json = r#"{
            "id": "2",
            "name": "Rose Petal Drop Earrings",
            "price": 8999,
            "originalPrice": 11999,
            "image": "img",
            "category": "earrings",
            "rating": 4.6,
            "reviews": 189,
            "description": "d",
            "material": "m",
            "metalType": "Silver",
            "isNew": true,
            "inStock": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.original_price, Some(11999));
        assert_eq!(product.metal_type, "Silver");
        assert!(product.is_new);
        assert!(!product.is_best_seller);
    }
}
