//! Product catalog module.
//!
//! Contains types for products, categories, and the static catalog.

mod catalog;
mod category;
mod product;

pub use catalog::{Catalog, RELATED_LIMIT, UNDER_PRICE_THRESHOLD};
pub use category::Category;
pub use product::{Product, METAL_TYPES};

#[cfg(test)]
pub(crate) use product::sample;
