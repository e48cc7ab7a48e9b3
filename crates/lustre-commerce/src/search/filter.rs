//! The listing filter pipeline.

use crate::catalog::Product;
use crate::search::FilterCriteria;

/// Narrow and order `products` according to `criteria`.
///
/// Stages run in a fixed order: category, metal, price range, search text,
/// collection, then sort. The input is never modified and identical inputs
/// always produce identical output.
pub fn filter_products<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let search = criteria
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|p| criteria.categories.is_empty() || criteria.categories.contains(&p.category))
        .filter(|p| criteria.metals.is_empty() || criteria.metals.contains(&p.metal_type))
        .filter(|p| criteria.price_range.map_or(true, |r| r.contains(p.price)))
        .filter(|p| {
            search
                .as_deref()
                .map_or(true, |needle| p.name.to_lowercase().contains(needle))
        })
        .filter(|p| criteria.collection.map_or(true, |c| c.matches(p)))
        .collect();

    criteria.sort.apply(&mut matched);

    tracing::trace!(
        total = products.len(),
        matched = matched.len(),
        sort = %criteria.sort,
        "filtered products"
    );
    matched
}
