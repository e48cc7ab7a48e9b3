//! Wishlist commands.

use anyhow::Result;
use dialoguer::Confirm;
use lustre_commerce::wishlist::WishlistStore;
use lustre_commerce::ProductId;

use super::{WishlistArgs, WishlistCommand};
use crate::context::Context;
use crate::output::{stock_badge, truncate};

const WIDTHS: [usize; 4] = [4, 30, 12, 12];

/// Run the wishlist command.
pub async fn run(args: WishlistArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(WishlistCommand::Show) | None => show_wishlist(ctx).await,
        Some(WishlistCommand::Add { id }) => add_item(&id, ctx).await,
        Some(WishlistCommand::Remove { id }) => remove_item(&id, ctx).await,
        Some(WishlistCommand::Toggle { id }) => toggle_item(&id, ctx).await,
        Some(WishlistCommand::MoveToCart { id }) => move_to_cart(&id, ctx).await,
        Some(WishlistCommand::Clear { yes }) => clear_wishlist(yes, ctx).await,
    }
}

async fn show_wishlist(ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    print_wishlist(store.wishlist(), ctx);
    Ok(())
}

async fn add_item(id: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let id = ProductId::new(id);

    if store.add_to_wishlist_by_id(&id)? {
        ctx.output.success(&format!("Saved {} to your wishlist", id));
    } else {
        ctx.output.info(&format!("{} is already in your wishlist", id));
    }
    print_wishlist(store.wishlist(), ctx);
    Ok(())
}

async fn remove_item(id: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let id = ProductId::new(id);

    if store.wishlist_mut().remove_from_wishlist(&id)? {
        ctx.output.success(&format!("Removed {} from your wishlist", id));
    } else {
        ctx.output.warn(&format!("{} is not in your wishlist", id));
    }
    print_wishlist(store.wishlist(), ctx);
    Ok(())
}

async fn toggle_item(id: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let id = ProductId::new(id);

    if store.toggle_wishlist_by_id(&id)? {
        ctx.output.success(&format!("Saved {} to your wishlist", id));
    } else {
        ctx.output.success(&format!("Removed {} from your wishlist", id));
    }
    print_wishlist(store.wishlist(), ctx);
    Ok(())
}

async fn move_to_cart(id: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let id = ProductId::new(id);

    if store.move_to_cart(&id)? {
        ctx.output.success(&format!(
            "Moved {} to your cart ({} item(s) in cart)",
            id,
            store.cart().total_items()
        ));
    } else {
        ctx.output.warn(&format!("{} is not in your wishlist", id));
    }
    print_wishlist(store.wishlist(), ctx);
    Ok(())
}

async fn clear_wishlist(yes: bool, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    if store.wishlist().is_empty() {
        ctx.output.info("Your wishlist is already empty");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} saved product(s)?",
                store.wishlist().total_items()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Wishlist left unchanged");
            return Ok(());
        }
    }

    store.wishlist_mut().clear_wishlist()?;
    ctx.output.success("Wishlist cleared");
    if ctx.output.is_json() {
        print_wishlist(store.wishlist(), ctx);
    }
    Ok(())
}

fn print_wishlist(wishlist: &WishlistStore, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": wishlist.items(),
            "totalItems": wishlist.total_items(),
        }));
        return;
    }

    ctx.output.header(&format!("My Wishlist ({} items)", wishlist.total_items()));
    if wishlist.is_empty() {
        ctx.output.info("Your wishlist is empty. Save pieces you love with `lustre wishlist add <id>`.");
        return;
    }

    ctx.output.table_row(&["ID", "PRODUCT", "PRICE", "STOCK"], &WIDTHS);
    for product in wishlist.items() {
        let name = truncate(&product.name, WIDTHS[1]);
        let price = product.price_money().to_string();
        let stock = stock_badge(product.in_stock);
        ctx.output
            .table_row(&[product.id.as_str(), &name, &price, &stock], &WIDTHS);
    }
}
