//! Wishlist store.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::storage;
use lustre_cache::Cache;

/// Storage key holding the serialized wishlist.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist";

/// Products the shopper has saved for later.
///
/// Each product id appears at most once; entries keep the order they were
/// saved in. Persisted after every mutation like the cart.
#[derive(Debug)]
pub struct WishlistStore {
    items: Vec<Product>,
    cache: Cache,
}

impl WishlistStore {
    /// Open the wishlist, rehydrating whatever the cache holds.
    pub fn open(cache: Cache) -> Self {
        let stored: Vec<Product> = storage::load_or_empty(&cache, WISHLIST_STORAGE_KEY);
        let mut items: Vec<Product> = Vec::with_capacity(stored.len());
        for product in stored {
            if !items.iter().any(|p| p.id == product.id) {
                items.push(product);
            }
        }
        Self { items, cache }
    }

    /// Saved products.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of saved products.
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if a product is saved.
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == product_id)
    }

    /// Save a product. Returns `false` if it was already saved.
    pub fn add_to_wishlist(&mut self, product: &Product) -> Result<bool, CommerceError> {
        if self.is_in_wishlist(&product.id) {
            return Ok(false);
        }
        self.items.push(product.clone());
        tracing::debug!(product_id = %product.id, "added to wishlist");
        self.save()?;
        Ok(true)
    }

    /// Remove a product. Returns `false` if it was not saved.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) -> Result<bool, CommerceError> {
        let len_before = self.items.len();
        self.items.retain(|p| &p.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(%product_id, "removed from wishlist");
            self.save()?;
        }
        Ok(removed)
    }

    /// Remove the product if saved, save it otherwise. Returns whether the
    /// product is saved afterwards.
    pub fn toggle(&mut self, product: &Product) -> Result<bool, CommerceError> {
        if self.remove_from_wishlist(&product.id)? {
            Ok(false)
        } else {
            self.add_to_wishlist(product)
        }
    }

    /// Remove every saved product.
    pub fn clear_wishlist(&mut self) -> Result<(), CommerceError> {
        self.items.clear();
        tracing::debug!("cleared wishlist");
        self.save()
    }

    fn save(&self) -> Result<(), CommerceError> {
        storage::save(&self.cache, WISHLIST_STORAGE_KEY, &self.items)
    }
}
