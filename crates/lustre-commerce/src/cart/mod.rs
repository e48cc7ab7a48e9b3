//! Shopping cart module.
//!
//! Contains the cart store, line items, pricing, and coupons.

mod cart;
mod discount;
mod pricing;

pub use cart::{CartStore, LineItem, CART_STORAGE_KEY};
pub use discount::Coupon;
pub use pricing::{delivery_fee_for, CartPricing, DELIVERY_FEE, FREE_DELIVERY_THRESHOLD};
