//! Product detail command.

use anyhow::Result;
use lustre_commerce::catalog::RELATED_LIMIT;
use lustre_commerce::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{format_rating, product_badges, stock_badge};

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let id = ProductId::new(args.id);
    let product = store.catalog().require_product(&id)?;
    let related = store.catalog().related(product, RELATED_LIMIT);
    let in_wishlist = store.wishlist().is_in_wishlist(&id);
    let in_cart = store.cart().get(&id).map_or(0, |item| item.quantity);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "discountPercent": product.discount_percent(),
            "inWishlist": in_wishlist,
            "inCart": in_cart,
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    let badges = product_badges(product.is_new, product.is_best_seller, product.is_on_sale());
    if !badges.is_empty() {
        ctx.output.info(&badges);
    }

    ctx.output.kv("id", product.id.as_str());
    match product.original_price_money().filter(|_| product.is_on_sale()) {
        Some(original) => ctx.output.kv(
            "price",
            &format!(
                "{} (was {}, {}% off)",
                product.price_money(),
                original,
                product.discount_percent()
            ),
        ),
        None => ctx.output.kv("price", &product.price_money().to_string()),
    }
    ctx.output.kv("rating", &format_rating(product.rating, product.reviews));
    ctx.output.kv("category", product.category.as_str());
    if let Some(sub) = &product.subcategory {
        ctx.output.kv("subcategory", sub);
    }
    ctx.output.kv("material", &product.material);
    ctx.output.kv("metal", &product.metal_type);
    if let Some(weight) = &product.weight {
        ctx.output.kv("weight", weight);
    }
    ctx.output.kv("availability", &stock_badge(product.in_stock));
    ctx.output.kv("wishlist", if in_wishlist { "saved" } else { "not saved" });
    if in_cart > 0 {
        ctx.output.kv("in cart", &in_cart.to_string());
    }

    ctx.output.blank();
    ctx.output.info(&product.description);

    let gallery = product.gallery();
    if gallery.len() > 1 {
        ctx.output.header("Images");
        for image in gallery {
            ctx.output.list_item(image);
        }
    }

    if !related.is_empty() {
        ctx.output.header("You May Also Like");
        for other in related {
            ctx.output.list_item(&format!(
                "[{}] {} - {}",
                other.id,
                other.name,
                other.price_money()
            ));
        }
    }

    Ok(())
}
