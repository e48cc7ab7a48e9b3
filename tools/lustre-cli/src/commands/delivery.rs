//! Delivery availability command.

use anyhow::Result;
use lustre_commerce::checkout::check_delivery;

use super::DeliveryArgs;
use crate::context::Context;

/// Run the delivery command.
pub async fn run(args: DeliveryArgs, ctx: &Context) -> Result<()> {
    let estimate = check_delivery(&args.pincode)?;

    if ctx.output.is_json() {
        ctx.output.json(&estimate);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Delivery to {} available in {}",
        estimate.pincode, estimate.window
    ));
    Ok(())
}
