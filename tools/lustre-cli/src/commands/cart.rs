//! Cart commands.

use anyhow::Result;
use dialoguer::Confirm;
use lustre_commerce::cart::{CartPricing, CartStore, Coupon, FREE_DELIVERY_THRESHOLD};
use lustre_commerce::{Money, ProductId};

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::truncate;

const WIDTHS: [usize; 5] = [4, 30, 12, 5, 12];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CartCommand::Show { coupon }) => show_cart(coupon.as_deref(), ctx).await,
        None => show_cart(None, ctx).await,
        Some(CartCommand::Add { id, quantity }) => add_item(&id, quantity, ctx).await,
        Some(CartCommand::Remove { id }) => remove_item(&id, ctx).await,
        Some(CartCommand::Update { id, quantity }) => update_item(&id, quantity, ctx).await,
        Some(CartCommand::Clear { yes }) => clear_cart(yes, ctx).await,
        Some(CartCommand::Coupon { code }) => show_cart(Some(&code), ctx).await,
    }
}

async fn show_cart(coupon: Option<&str>, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let coupon = coupon.map(Coupon::redeem).transpose()?;
    print_cart(store.cart(), coupon.as_ref(), ctx);
    Ok(())
}

async fn add_item(id: &str, quantity: i64, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let id = ProductId::new(id);
    store.add_to_cart_by_id(&id, quantity)?;

    if let Some(item) = store.cart().get(&id) {
        ctx.output.success(&format!(
            "Added {} to cart (quantity {})",
            item.product.name, item.quantity
        ));
    }
    print_cart(store.cart(), None, ctx);
    Ok(())
}

async fn remove_item(id: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let id = ProductId::new(id);

    if store.cart_mut().remove_from_cart(&id)? {
        ctx.output.success(&format!("Removed {} from cart", id));
    } else {
        ctx.output.warn(&format!("Product {} is not in the cart", id));
    }
    print_cart(store.cart(), None, ctx);
    Ok(())
}

async fn update_item(id: &str, quantity: i64, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let id = ProductId::new(id);

    if !store.cart_mut().update_quantity(&id, quantity)? {
        ctx.output.warn(&format!("Product {} is not in the cart", id));
    } else if quantity <= 0 {
        ctx.output.success(&format!("Removed {} from cart", id));
    } else {
        ctx.output.success(&format!("Set {} to quantity {}", id, quantity));
    }
    print_cart(store.cart(), None, ctx);
    Ok(())
}

async fn clear_cart(yes: bool, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    if store.cart().is_empty() {
        ctx.output.info("Your cart is already empty");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} item(s) from the cart?", store.cart().total_items()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    store.cart_mut().clear_cart()?;
    ctx.output.success("Cart cleared");
    if ctx.output.is_json() {
        print_cart(store.cart(), None, ctx);
    }
    Ok(())
}

/// Print the cart's line items and price breakdown.
pub fn print_cart(cart: &CartStore, coupon: Option<&Coupon>, ctx: &Context) {
    let pricing = cart.pricing(coupon);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.items(),
            "totalItems": cart.total_items(),
            "pricing": pricing,
        }));
        return;
    }

    ctx.output.header(&format!("Shopping Cart ({} items)", cart.total_items()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty. Add `lustre cart add <id>` to start shopping.");
        return;
    }

    ctx.output.table_row(&["ID", "PRODUCT", "PRICE", "QTY", "TOTAL"], &WIDTHS);
    for item in cart.items() {
        let name = truncate(&item.product.name, WIDTHS[1]);
        let price = item.product.price_money().to_string();
        let quantity = item.quantity.to_string();
        let total = Money::inr(item.line_total()).to_string();
        ctx.output.table_row(
            &[item.product.id.as_str(), &name, &price, &quantity, &total],
            &WIDTHS,
        );
    }

    ctx.output.blank();
    print_pricing(&pricing, ctx);
}

/// Print an order summary block.
pub fn print_pricing(pricing: &CartPricing, ctx: &Context) {
    ctx.output.kv("subtotal", &pricing.subtotal.display());
    if let Some(code) = &pricing.coupon {
        ctx.output.kv(&format!("discount ({})", code), &format!("-{}", pricing.discount));
    }
    if pricing.has_free_delivery() {
        ctx.output.kv("delivery", "FREE");
    } else {
        ctx.output.kv("delivery", &pricing.delivery_fee.display());
        ctx.output.info(&format!(
            "Add items worth more than {} for free delivery",
            Money::inr(FREE_DELIVERY_THRESHOLD)
        ));
    }
    ctx.output.kv("total", &pricing.total.display());
}
