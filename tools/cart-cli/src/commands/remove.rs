//! Remove a line item.

use anyhow::{bail, Result};

use super::{report_save_failure, RemoveArgs};
use crate::context::Context;

/// Run the remove command.
pub fn run(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    let Some(item) = cart.remove_item(args.index) else {
        bail!(
            "No row {} in the cart ({} rows)",
            args.index,
            cart.state().len()
        );
    };
    report_save_failure(&cart, &ctx.output);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "removed": item,
            "total_quantity": cart.total_quantity(),
            "total_value": cart.total_value(),
        }));
        return Ok(());
    }

    ctx.output.success(&format!("Removed {} from cart", item.name));
    ctx.output.kv(
        "total",
        &cart.total_value().display(&cart.config().currency_symbol),
    );
    Ok(())
}
