//! Session state shared by the storefront's views.

use crate::cart::CartStore;
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{filter_products, FilterCriteria};
use crate::wishlist::WishlistStore;
use lustre_cache::Cache;

/// The catalog plus the one cart and one wishlist of a session.
///
/// Constructed once and handed to consumers by reference.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    cart: CartStore,
    wishlist: WishlistStore,
}

impl Storefront {
    /// Open the session, rehydrating the cart and wishlist from `cache`.
    pub fn open(catalog: Catalog, cache: Cache) -> Self {
        let cart = CartStore::open(cache.clone());
        let wishlist = WishlistStore::open(cache);
        tracing::debug!(
            cart_items = cart.total_items(),
            wishlist_items = wishlist.total_items(),
            "opened storefront"
        );
        Self {
            catalog,
            cart,
            wishlist,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    pub fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    /// Products matching `criteria`, in listing order.
    pub fn browse(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        filter_products(self.catalog.products(), criteria)
    }

    /// Add a catalog product to the cart by id.
    pub fn add_to_cart_by_id(&mut self, id: &ProductId, quantity: i64) -> Result<(), CommerceError> {
        let product = self.catalog.require_product(id)?;
        self.cart.add_to_cart(product, quantity)
    }

    /// Save a catalog product to the wishlist by id.
    pub fn add_to_wishlist_by_id(&mut self, id: &ProductId) -> Result<bool, CommerceError> {
        let product = self.catalog.require_product(id)?;
        self.wishlist.add_to_wishlist(product)
    }

    /// Toggle a catalog product's wishlist membership by id.
    pub fn toggle_wishlist_by_id(&mut self, id: &ProductId) -> Result<bool, CommerceError> {
        let product = self.catalog.require_product(id)?;
        self.wishlist.toggle(product)
    }

    /// Move a saved product into the cart (quantity 1) and off the wishlist.
    ///
    /// Uses the wishlist's snapshot of the product. Returns `false` if the
    /// product was not saved.
    pub fn move_to_cart(&mut self, id: &ProductId) -> Result<bool, CommerceError> {
        let product = match self.wishlist.items().iter().find(|p| &p.id == id) {
            Some(product) => product.clone(),
            None => return Ok(false),
        };
        self.cart.add_to_cart(&product, 1)?;
        self.wishlist.remove_from_wishlist(id)
    }
}
