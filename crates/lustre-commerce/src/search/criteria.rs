//! Listing filter criteria.

use std::collections::BTreeSet;

use crate::catalog::{Product, METAL_TYPES};
use crate::ids::CategoryId;
use crate::search::SortKey;
use serde::{Deserialize, Serialize};

/// Inclusive price bounds in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PriceRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl PriceRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// Only an upper bound.
    pub fn up_to(max: i64) -> Self {
        Self::new(None, Some(max))
    }

    /// Only a lower bound.
    pub fn at_least(min: i64) -> Self {
        Self::new(Some(min), None)
    }

    /// The bounds that actually constrain anything.
    ///
    /// A bound of zero or less counts as absent, and an inverted range
    /// (min above max) constrains nothing at all.
    pub fn effective(&self) -> PriceRange {
        let min = self.min.filter(|m| *m > 0);
        let max = self.max.filter(|m| *m > 0);
        match (min, max) {
            (Some(lo), Some(hi)) if lo > hi => PriceRange::default(),
            _ => PriceRange { min, max },
        }
    }

    /// Check if a price falls inside the range.
    pub fn contains(&self, price: i64) -> bool {
        let range = self.effective();
        range.min.map_or(true, |min| price >= min) && range.max.map_or(true, |max| price <= max)
    }
}

/// A named price bucket from the filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePreset {
    pub label: &'static str,
    pub range: PriceRange,
}

/// Price buckets offered on the listing page.
pub const PRICE_PRESETS: [PricePreset; 4] = [
    PricePreset {
        label: "Under \u{20b9}5,000",
        range: PriceRange {
            min: None,
            max: Some(5000),
        },
    },
    PricePreset {
        label: "\u{20b9}5,000 - \u{20b9}15,000",
        range: PriceRange {
            min: Some(5000),
            max: Some(15000),
        },
    },
    PricePreset {
        label: "\u{20b9}15,000 - \u{20b9}30,000",
        range: PriceRange {
            min: Some(15000),
            max: Some(30000),
        },
    },
    PricePreset {
        label: "Above \u{20b9}30,000",
        range: PriceRange {
            min: Some(30000),
            max: None,
        },
    },
];

/// Merchandising collections linked from the home page (`?filter=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    /// New arrivals.
    New,
    /// Marked-down products.
    Sale,
    /// Best sellers.
    Bestseller,
}

impl Collection {
    /// Parse a `filter` query value. Unknown values select nothing.
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "new" | "new-arrivals" => Some(Collection::New),
            "sale" => Some(Collection::Sale),
            "bestseller" | "bestsellers" | "best-sellers" => Some(Collection::Bestseller),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::New => "new",
            Collection::Sale => "sale",
            Collection::Bestseller => "bestseller",
        }
    }

    /// Check if a product belongs to the collection.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Collection::New => product.is_new,
            Collection::Sale => product.is_on_sale(),
            Collection::Bestseller => product.is_best_seller,
        }
    }
}

/// Category, metal, price, search and sort selections for a listing view.
///
/// Empty sets and absent values mean "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    /// Categories to keep (OR).
    #[serde(default)]
    pub categories: BTreeSet<CategoryId>,
    /// Metal types to keep (OR).
    #[serde(default)]
    pub metals: BTreeSet<String>,
    /// Price bounds.
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    /// Case-insensitive substring of the product name.
    #[serde(default)]
    pub search: Option<String>,
    /// Merchandising collection.
    #[serde(default)]
    pub collection: Option<Collection>,
    /// Result order.
    #[serde(default)]
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Criteria that keep every product in catalog order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from a listing URL's query string.
    ///
    /// Understands `category`, `search`, `metal`, `maxPrice` and `filter`.
    /// Values that do not parse are ignored rather than rejected.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut criteria = Self::new();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "category" => {
                    criteria.categories.insert(CategoryId::new(value));
                }
                "search" => criteria.search = Some(value.to_string()),
                "metal" => {
                    let metal = match canonical_metal(value) {
                        Some(known) => known.to_string(),
                        None => {
                            tracing::debug!(value, "unknown metal type, listing will be empty");
                            value.to_string()
                        }
                    };
                    criteria.metals.insert(metal);
                }
                "maxPrice" => match value.parse::<i64>() {
                    Ok(max) if max > 0 => criteria.price_range = Some(PriceRange::up_to(max)),
                    _ => tracing::debug!(value, "ignoring unusable maxPrice"),
                },
                "filter" => criteria.collection = Collection::from_param(value),
                "sort" => {
                    if let Ok(sort) = value.parse() {
                        criteria.sort = sort;
                    }
                }
                _ => {}
            }
        }

        criteria
    }

    /// Add a category.
    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.categories.insert(id.into());
        self
    }

    /// Add a metal type.
    pub fn with_metal(mut self, metal: impl Into<String>) -> Self {
        self.metals.insert(metal.into());
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Set the collection.
    pub fn with_collection(mut self, collection: Collection) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Select the category if unselected, unselect it otherwise.
    pub fn toggle_category(&mut self, id: &CategoryId) {
        if !self.categories.remove(id) {
            self.categories.insert(id.clone());
        }
    }

    /// Select the metal if unselected, unselect it otherwise.
    pub fn toggle_metal(&mut self, metal: &str) {
        if !self.metals.remove(metal) {
            self.metals.insert(metal.to_string());
        }
    }

    /// Reset categories, metals, price range and sort.
    ///
    /// Search text and collection come from the URL and are left alone.
    pub fn clear(&mut self) {
        self.categories.clear();
        self.metals.clear();
        self.price_range = None;
        self.sort = SortKey::Featured;
    }

    /// Number of sidebar selections, for the mobile filter badge.
    pub fn active_filter_count(&self) -> usize {
        self.categories.len() + self.metals.len() + usize::from(self.price_range.is_some())
    }

    /// Check if any sidebar filter is selected.
    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }
}

/// Catalog spelling of a metal slug like `gold`, if it is a known metal.
fn canonical_metal(value: &str) -> Option<&'static str> {
    METAL_TYPES
        .iter()
        .copied()
        .find(|m| m.eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    #[test]
    fn test_price_range_contains() {
        let range = PriceRange::new(Some(5000), Some(15000));
        assert!(range.contains(5000));
        assert!(range.contains(15000));
        assert!(!range.contains(4999));
        assert!(!range.contains(15001));
        assert!(PriceRange::up_to(5000).contains(1));
        assert!(PriceRange::at_least(30000).contains(45999));
    }

    #[test]
    fn test_price_range_non_positive_bounds_ignored() {
        let range = PriceRange::new(Some(0), Some(-5));
        assert_eq!(range.effective(), PriceRange::default());
        assert!(range.contains(1_000_000));
    }

    #[test]
    fn test_inverted_price_range_is_no_constraint() {
        let range = PriceRange::new(Some(20000), Some(100));
        assert!(range.contains(1));
        assert!(range.contains(50000));
    }

    #[test]
    fn test_presets() {
        assert_eq!(PRICE_PRESETS[0].range, PriceRange::up_to(5000));
        assert_eq!(PRICE_PRESETS[3].range, PriceRange::at_least(30000));
    }

    #[test]
    fn test_collection_matches() {
        let mut product = sample("1", 100);
        assert!(!Collection::New.matches(&product));
        product.is_new = true;
        assert!(Collection::New.matches(&product));

        product.original_price = Some(150);
        assert!(Collection::Sale.matches(&product));
        assert!(!Collection::Bestseller.matches(&product));
    }

    #[test]
    fn test_from_query() {
        let criteria =
            FilterCriteria::from_query("?category=rings&search=diamond+ring&metal=gold&maxPrice=15000");
        assert!(criteria.categories.contains(&CategoryId::new("rings")));
        assert_eq!(criteria.search.as_deref(), Some("diamond ring"));
        assert!(criteria.metals.contains("Gold"));
        assert_eq!(criteria.price_range, Some(PriceRange::up_to(15000)));
        assert_eq!(criteria.sort, SortKey::Featured);
    }

    #[test]
    fn test_from_query_collections() {
        assert_eq!(
            FilterCriteria::from_query("filter=new").collection,
            Some(Collection::New)
        );
        assert_eq!(
            FilterCriteria::from_query("filter=sale").collection,
            Some(Collection::Sale)
        );
        assert_eq!(FilterCriteria::from_query("filter=husbands").collection, None);
    }

    #[test]
    fn test_from_query_ignores_garbage() {
        let criteria = FilterCriteria::from_query("maxPrice=cheap&category=&sort=random&foo=bar");
        assert_eq!(criteria, FilterCriteria::new());

        let criteria = FilterCriteria::from_query("maxPrice=-10");
        assert!(criteria.price_range.is_none());
    }

    #[test]
    fn test_from_query_unknown_metal_and_encoding() {
        let criteria = FilterCriteria::from_query("metal=black-rhodium&search=moon%20pendant");
        assert!(criteria.metals.contains("black-rhodium"));
        assert_eq!(criteria.search.as_deref(), Some("moon pendant"));
    }

    #[test]
    fn test_canonical_metal() {
        assert_eq!(canonical_metal("GOLD"), Some("Gold"));
        assert_eq!(canonical_metal("steel"), Some("Steel"));
        assert_eq!(canonical_metal("oxidised"), None);
        assert_eq!(canonical_metal("black-rhodium"), None);
    }

    #[test]
    fn test_toggles_and_count() {
        let mut criteria = FilterCriteria::new();
        let rings = CategoryId::new("rings");

        criteria.toggle_category(&rings);
        criteria.toggle_metal("Gold");
        criteria.price_range = Some(PRICE_PRESETS[1].range);
        assert_eq!(criteria.active_filter_count(), 3);

        criteria.toggle_category(&rings);
        assert_eq!(criteria.active_filter_count(), 2);
        assert!(criteria.has_active_filters());
    }

    #[test]
    fn test_clear_keeps_search() {
        let mut criteria = FilterCriteria::new()
            .with_category("rings")
            .with_metal("Gold")
            .with_price_range(PriceRange::up_to(5000))
            .with_search("ring")
            .with_sort(SortKey::Rating);

        criteria.clear();
        assert!(!criteria.has_active_filters());
        assert_eq!(criteria.sort, SortKey::Featured);
        assert_eq!(criteria.search.as_deref(), Some("ring"));
    }
}
