//! Search module.
//!
//! Contains filter criteria, sort keys, and the listing filter pipeline.

mod criteria;
mod filter;
mod sort;

pub use criteria::{Collection, FilterCriteria, PricePreset, PriceRange, PRICE_PRESETS};
pub use filter::filter_products;
pub use sort::SortKey;
