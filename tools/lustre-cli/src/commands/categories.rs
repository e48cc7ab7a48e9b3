//! Category listing command.

use anyhow::Result;
use lustre_commerce::search::FilterCriteria;

use crate::context::Context;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let categories = store.catalog().categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Shop by Category");
    ctx.output.table_row(&["ID", "NAME", "ITEMS", "LISTED"], &[12, 22, 8, 8]);

    for category in categories {
        let listed = store
            .browse(&FilterCriteria::new().with_category(category.id.clone()))
            .len();
        ctx.output.table_row(
            &[
                category.id.as_str(),
                &category.name,
                &category.product_count.to_string(),
                &listed.to_string(),
            ],
            &[12, 22, 8, 8],
        );
    }

    ctx.output.blank();
    ctx.output.info("Browse one with `lustre products --category <id>`");

    Ok(())
}
