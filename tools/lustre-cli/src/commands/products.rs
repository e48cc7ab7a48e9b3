//! Catalog listing command.

use anyhow::{bail, Context as _, Result};
use lustre_commerce::catalog::Product;
use lustre_commerce::CategoryId;
use lustre_commerce::search::{Collection, FilterCriteria, PriceRange, SortKey, PRICE_PRESETS};

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{format_rating, product_badges, truncate};

const WIDTHS: [usize; 6] = [4, 30, 12, 10, 12, 20];

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let criteria = build_criteria(&args)?;
    let store = ctx.storefront()?;
    for category in &args.category {
        store.catalog().require_category(&CategoryId::new(category.as_str()))?;
    }

    let mut products = store.browse(&criteria);
    let matched = products.len();
    if let Some(limit) = args.limit {
        products.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "criteria": criteria,
            "total": matched,
            "products": products,
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", criteria.sort.display_name()));
    if criteria.has_active_filters() {
        ctx.output.info(&format!(
            "{} filter(s) active",
            criteria.active_filter_count()
        ));
    }

    if products.is_empty() {
        ctx.output.info("No products found. Try adjusting your filters.");
        return Ok(());
    }

    ctx.output.table_row(
        &["ID", "NAME", "PRICE", "METAL", "RATING", "TAGS"],
        &WIDTHS,
    );
    for product in &products {
        print_row(product, ctx);
    }

    ctx.output.blank();
    ctx.output.info(&format!("Showing {} of {} product(s)", products.len(), matched));

    Ok(())
}

fn print_row(product: &Product, ctx: &Context) {
    let name = truncate(&product.name, WIDTHS[1]);
    let price = product.price_money().to_string();
    let rating = format_rating(product.rating, product.reviews);
    let badges = product_badges(product.is_new, product.is_best_seller, product.is_on_sale());
    ctx.output.table_row(
        &[
            product.id.as_str(),
            &name,
            &price,
            &product.metal_type,
            &rating,
            &badges,
        ],
        &WIDTHS,
    );
}

/// Combine `--query` with the explicit flags; flags add to or override what
/// the query string selected.
fn build_criteria(args: &ProductsArgs) -> Result<FilterCriteria> {
    let mut criteria = match args.query.as_deref() {
        Some(query) => FilterCriteria::from_query(query),
        None => FilterCriteria::new(),
    };

    for category in &args.category {
        criteria = criteria.with_category(category.as_str());
    }
    for metal in &args.metal {
        criteria = criteria.with_metal(metal.as_str());
    }

    if let Some(preset) = args.preset {
        criteria = criteria.with_price_range(PRICE_PRESETS[usize::from(preset) - 1].range);
    } else if args.min.is_some() || args.max.is_some() {
        criteria = criteria.with_price_range(PriceRange::new(args.min, args.max));
    }

    if let Some(search) = &args.search {
        criteria = criteria.with_search(search.as_str());
    }

    if let Some(filter) = &args.filter {
        match Collection::from_param(filter) {
            Some(collection) => criteria = criteria.with_collection(collection),
            None => bail!("Unknown collection: {} (expected new, sale or bestseller)", filter),
        }
    }

    if let Some(sort) = &args.sort {
        let sort: SortKey = sort
            .parse()
            .with_context(|| "expected featured, price-low, price-high, rating or newest")?;
        criteria = criteria.with_sort(sort);
    }

    Ok(criteria)
}
