//! Checkout command.

use anyhow::{bail, Result};
use chrono::Local;
use dialoguer::{Confirm, Input};
use lustre_commerce::checkout::{CheckoutFlow, CheckoutStep, PaymentMethod, ShippingAddress};

use super::cart::print_pricing;
use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let payment: PaymentMethod = args.payment.parse()?;
    let mut store = ctx.storefront()?;

    if store.cart().is_empty() {
        bail!("Your cart is empty. Add something with `lustre cart add <id>` first.");
    }

    let interactive = !ctx.output.is_json() && console::user_attended();
    let address = collect_address(&args, interactive)?;

    let mut flow = CheckoutFlow::new();

    // Step 1: Delivery address
    ctx.output.header(&step_title(flow.step));
    flow.submit_address(address)?;
    if let Some(address) = &flow.address {
        for line in address.multi_line().lines() {
            ctx.output.info(line);
        }
    }

    // Step 2: Payment
    ctx.output.header(&step_title(flow.step));
    flow.select_payment(payment)?;
    ctx.output.kv("method", payment.display_name());
    ctx.output.kv("details", payment.description());

    let summary = flow.summary(store.cart());
    ctx.output.header("Order Summary");
    for item in store.cart().items() {
        ctx.output.list_item(&format!("{} x{}", item.product.name, item.quantity));
    }
    print_pricing(&summary, ctx);

    if !args.yes && interactive {
        ctx.output.blank();
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", summary.total))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order not placed; your cart is unchanged");
            return Ok(());
        }
    }

    let gateway = ctx.gateway();
    let spinner = ctx.output.spinner("Processing your order...");
    let result = flow.place_order(store.cart_mut(), &gateway).await;
    spinner.finish_and_clear();
    let confirmation = result?;

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.header(&step_title(flow.step));
    ctx.output.success("Order Placed Successfully!");
    ctx.output.kv("order id", &format!("#{}", confirmation.order_id));
    ctx.output.kv("placed", &Local::now().format("%d %b %Y, %H:%M").to_string());
    ctx.output.kv("paid via", confirmation.payment.display_name());
    ctx.output.kv("total", &confirmation.pricing.total.display());
    ctx.output.info("Thank you for your order. We'll send you a confirmation email shortly.");

    Ok(())
}

fn step_title(step: CheckoutStep) -> String {
    format!("Step {}: {}", step.number(), step.display_name())
}

/// Build the address from flags, prompting for anything missing when a
/// person is at the terminal. Blank fields are left for validation to report.
fn collect_address(args: &CheckoutArgs, interactive: bool) -> Result<ShippingAddress> {
    let field = |value: &Option<String>, prompt: &str| -> Result<String> {
        match value {
            Some(value) => Ok(value.clone()),
            None if interactive => Ok(Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?),
            None => Ok(String::new()),
        }
    };

    Ok(ShippingAddress {
        name: field(&args.name, "Full name")?,
        phone: field(&args.phone, "Phone number")?,
        email: field(&args.email, "Email")?,
        street: field(&args.street, "Street address")?,
        city: field(&args.city, "City")?,
        state: field(&args.state, "State")?,
        pincode: field(&args.pincode, "Pincode")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CheckoutArgs {
        CheckoutArgs {
            name: Some("Asha Rao".to_string()),
            phone: Some("9876543210".to_string()),
            email: Some("asha@example.in".to_string()),
            street: Some("12 MG Road".to_string()),
            city: Some("Bengaluru".to_string()),
            state: None,
            pincode: Some("560001".to_string()),
            payment: "upi".to_string(),
            yes: true,
        }
    }

    #[test]
    fn test_missing_flag_left_blank_when_not_interactive() {
        let address = collect_address(&args(), false).unwrap();
        assert_eq!(address.city, "Bengaluru");
        assert_eq!(address.first_missing_field(), Some("state"));
    }

    #[test]
    fn test_step_title() {
        assert_eq!(step_title(CheckoutStep::Payment), "Step 2: Payment");
    }
}
