//! Storefront domain types and logic for Lustre.
//!
//! This crate provides the client-side core of a jewellery storefront:
//!
//! - **Catalog**: Products and categories from the bundled dataset
//! - **Cart**: Persistent cart store, coupons, pricing
//! - **Wishlist**: Persistent saved-for-later list
//! - **Search**: Listing filter criteria, sort keys, the filter pipeline
//! - **Checkout**: Address and payment steps, order submission
//!
//! Stores persist through a [`lustre_cache::Cache`], so the same code runs
//! against memory or on-disk storage.
//!
//! # Example
//!
//! ```rust,no_run
//! use lustre_cache::Cache;
//! use lustre_commerce::prelude::*;
//!
//! # fn main() -> Result<(), CommerceError> {
//! let mut store = Storefront::open(Catalog::jewellery()?, Cache::memory());
//!
//! store.add_to_cart_by_id(&ProductId::new("1"), 2)?;
//! store.toggle_wishlist_by_id(&ProductId::new("8"))?;
//!
//! let criteria = FilterCriteria::from_query("metal=gold&maxPrice=15000")
//!     .with_sort(SortKey::PriceLow);
//! for product in store.browse(&criteria) {
//!     println!("{} {}", product.name, product.price_money());
//! }
//!
//! let pricing = store.cart().pricing(None);
//! println!("Total: {}", pricing.total.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod storefront;
pub mod wishlist;

mod storage;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{CartPricing, CartStore, Coupon, LineItem};

    // Wishlist
    pub use crate::wishlist::WishlistStore;

    // Checkout
    pub use crate::checkout::{
        check_delivery, CheckoutFlow, CheckoutStep, DeliveryEstimate, OrderConfirmation,
        OrderGateway, OrderRequest, PaymentMethod, ShippingAddress,
    };

    // Search
    pub use crate::search::{filter_products, Collection, FilterCriteria, PriceRange, SortKey};
}
