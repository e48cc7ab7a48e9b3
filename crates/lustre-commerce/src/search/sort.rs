//! Sort options for the listing page.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// How the listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Highest rated first.
    Rating,
    /// New arrivals first. Partitions on the `is_new` flag only; the catalog
    /// carries no dates.
    Newest,
}

impl SortKey {
    /// All sort keys in menu order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Newest => "Newest",
        }
    }

    /// Reorder `products` in place. Every ordering is stable, so products
    /// with equal keys keep their input order.
    pub fn apply(&self, products: &mut [&Product]) {
        match self {
            SortKey::Featured => {}
            SortKey::PriceLow => products.sort_by_key(|p| p.price),
            SortKey::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Rating => products.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
            SortKey::Newest => products.sort_by_key(|p| !p.is_new),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::ValidationError(format!("unknown sort key: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_parse_roundtrip() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("PRICE-LOW".parse::<SortKey>().unwrap(), SortKey::PriceLow);
        assert!("cheapest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SortKey::PriceHigh).unwrap();
        assert_eq!(json, r#""price-high""#);
    }

    #[test]
    fn test_price_sorts_are_stable() {
        let a = sample("a", 200);
        let b = sample("b", 100);
        let c = sample("c", 200);
        let mut products = vec![&a, &b, &c];

        SortKey::PriceLow.apply(&mut products);
        assert_eq!(ids(&products), vec!["b", "a", "c"]);

        let mut products = vec![&a, &b, &c];
        SortKey::PriceHigh.apply(&mut products);
        assert_eq!(ids(&products), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_rating_descending() {
        let mut a = sample("a", 1);
        a.rating = 4.2;
        let mut b = sample("b", 1);
        b.rating = 4.9;
        let mut c = sample("c", 1);
        c.rating = 4.2;
        let mut products = vec![&a, &b, &c];

        SortKey::Rating.apply(&mut products);
        assert_eq!(ids(&products), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_newest_partitions_stably() {
        let p1 = sample("old-1", 1);
        let mut p2 = sample("new-1", 1);
        p2.is_new = true;
        let p3 = sample("old-2", 1);
        let mut p4 = sample("new-2", 1);
        p4.is_new = true;
        let mut products = vec![&p1, &p2, &p3, &p4];

        SortKey::Newest.apply(&mut products);
        assert_eq!(ids(&products), vec!["new-1", "new-2", "old-1", "old-2"]);
    }

    #[test]
    fn test_featured_keeps_order() {
        let a = sample("a", 300);
        let b = sample("b", 100);
        let mut products = vec![&a, &b];
        SortKey::Featured.apply(&mut products);
        assert_eq!(ids(&products), vec!["a", "b"]);
    }
}
