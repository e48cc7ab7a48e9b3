//! Cart store and line item types.

use crate::cart::{CartPricing, Coupon};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::storage;
use lustre_cache::Cache;
use serde::{Deserialize, Serialize};

/// Storage key holding the serialized line items.
pub const CART_STORAGE_KEY: &str = "cart";

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Snapshot of the product being purchased.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl LineItem {
    /// Unit price times quantity.
    pub fn line_total(&self) -> i64 {
        self.product.price.saturating_mul(self.quantity)
    }
}

/// The shopper's cart.
///
/// Owns its line items exclusively and writes the full list to the cache
/// after every mutation. There is at most one line item per product id.
#[derive(Debug)]
pub struct CartStore {
    items: Vec<LineItem>,
    cache: Cache,
    currency: Currency,
}

impl CartStore {
    /// Open the cart, rehydrating whatever the cache holds.
    ///
    /// Absent or unparseable content starts an empty cart.
    pub fn open(cache: Cache) -> Self {
        let stored: Vec<LineItem> = storage::load_or_empty(&cache, CART_STORAGE_KEY);
        Self {
            items: normalize(stored),
            cache,
            currency: Currency::INR,
        }
    }

    /// Line items in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line item for a product.
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Check if the cart holds a product.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` of a product.
    ///
    /// A product already in the cart has its quantity increased; otherwise a
    /// new line item is appended. Quantities below 1 are treated as 1.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        let quantity = quantity.max(1);

        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            tracing::debug!(
                product_id = %product.id,
                quantity = existing.quantity,
                "increased cart quantity"
            );
        } else {
            self.items.push(LineItem {
                product: product.clone(),
                quantity,
            });
            tracing::debug!(product_id = %product.id, quantity, "added to cart");
        }

        self.save()
    }

    /// Remove a product's line item. Returns whether anything was removed.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<bool, CommerceError> {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(%product_id, "removed from cart");
            self.save()?;
        }
        Ok(removed)
    }

    /// Set a product's quantity exactly.
    ///
    /// A quantity of zero or less removes the line item. Returns whether a
    /// line item was changed.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return self.remove_from_cart(product_id);
        }

        match self.items.iter_mut().find(|i| &i.product.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                tracing::debug!(%product_id, quantity, "updated cart quantity");
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every line item.
    pub fn clear_cart(&mut self) -> Result<(), CommerceError> {
        self.items.clear();
        tracing::debug!("cleared cart");
        self.save()
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of unit price times quantity, in whole currency units.
    pub fn total_price(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.line_total()))
    }

    /// Total price as money.
    pub fn total_money(&self) -> Money {
        Money::new(self.total_price(), self.currency)
    }

    /// Price the cart with an optional coupon.
    pub fn pricing(&self, coupon: Option<&Coupon>) -> CartPricing {
        CartPricing::calculate(self.total_price(), coupon, self.currency)
    }

    fn save(&self) -> Result<(), CommerceError> {
        storage::save(&self.cache, CART_STORAGE_KEY, &self.items)
    }
}

/// Restore the one-line-per-product invariant on rehydrated data: merge
/// duplicate ids and drop non-positive quantities.
fn normalize(stored: Vec<LineItem>) -> Vec<LineItem> {
    let mut items: Vec<LineItem> = Vec::with_capacity(stored.len());
    for item in stored.into_iter().filter(|i| i.quantity > 0) {
        match items.iter_mut().find(|i| i.product.id == item.product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => items.push(item),
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    fn cart() -> CartStore {
        CartStore::open(Cache::memory())
    }

    #[test]
    fn test_empty_cart() {
        let cart = cart();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_add_item() {
        let mut cart = cart();
        cart.add_to_cart(&sample("1", 1000), 2).unwrap();

        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = cart();
        let product = sample("A", 1000);

        cart.add_to_cart(&product, 1).unwrap();
        cart.add_to_cart(&product, 2).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get(&product.id).unwrap().quantity, 3);
    }

    #[test]
    fn test_add_coerces_quantity() {
        let mut cart = cart();
        let product = sample("1", 500);

        cart.add_to_cart(&product, 0).unwrap();
        cart.add_to_cart(&product, -4).unwrap();

        assert_eq!(cart.get(&product.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = cart();
        let product = sample("1", 1000);
        cart.add_to_cart(&product, 1).unwrap();

        assert!(cart.update_quantity(&product.id, 5).unwrap());
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = cart();
        let product = sample("1", 1000);
        cart.add_to_cart(&product, 3).unwrap();

        assert!(cart.update_quantity(&product.id, 0).unwrap());
        assert!(!cart.contains(&product.id));

        cart.add_to_cart(&product, 1).unwrap();
        cart.update_quantity(&product.id, -1).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut cart = cart();
        assert!(!cart.update_quantity(&ProductId::new("ghost"), 3).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = cart();
        let product = sample("1", 1000);
        cart.add_to_cart(&product, 1).unwrap();

        assert!(cart.remove_from_cart(&product.id).unwrap());
        assert!(!cart.remove_from_cart(&product.id).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals() {
        let mut cart = cart();
        cart.add_to_cart(&sample("1", 1000), 2).unwrap();
        cart.add_to_cart(&sample("2", 2000), 1).unwrap();

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), 4000);
        assert_eq!(cart.total_money().display(), "\u{20b9}4,000");
    }

    #[test]
    fn test_clear() {
        let mut cart = cart();
        cart.add_to_cart(&sample("1", 1000), 2).unwrap();
        cart.clear_cart().unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn test_pricing_with_coupon() {
        let mut cart = cart();
        cart.add_to_cart(&sample("1", 24999), 1).unwrap();

        let coupon = Coupon::redeem("first10").unwrap();
        let pricing = cart.pricing(Some(&coupon));
        assert_eq!(pricing.subtotal.amount, 24999);
        assert_eq!(pricing.discount.amount, 2500);
        assert_eq!(pricing.total.amount, 22499);
    }

    #[test]
    fn test_mutations_persist() {
        let cache = Cache::memory();
        let mut cart = CartStore::open(cache.clone());
        let product = sample("1", 1000);
        cart.add_to_cart(&product, 2).unwrap();

        let stored: Vec<LineItem> = cache.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(stored, cart.items());

        cart.update_quantity(&product.id, 7).unwrap();
        let reopened = CartStore::open(cache.clone());
        assert_eq!(reopened.get(&product.id).unwrap().quantity, 7);

        cart.clear_cart().unwrap();
        let stored: Vec<LineItem> = cache.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert!(stored.is_empty());
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let cache = Cache::memory();
        cache.set_raw(CART_STORAGE_KEY, b"definitely not json").unwrap();

        let mut cart = CartStore::open(cache.clone());
        assert!(cart.is_empty());

        cart.add_to_cart(&sample("1", 100), 1).unwrap();
        let stored: Vec<LineItem> = cache.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_rehydrate_merges_duplicates() {
        let cache = Cache::memory();
        let product = sample("1", 100);
        let stored = vec![
            LineItem {
                product: product.clone(),
                quantity: 2,
            },
            LineItem {
                product: sample("2", 50),
                quantity: 0,
            },
            LineItem {
                product: product.clone(),
                quantity: 3,
            },
        ];
        cache.set(CART_STORAGE_KEY, &stored).unwrap();

        let cart = CartStore::open(cache);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get(&product.id).unwrap().quantity, 5);
    }
}
