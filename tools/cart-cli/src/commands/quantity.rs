//! Change a line item's quantity.

use anyhow::{bail, Result};
use turbo_cart::cart::QuantityChange;

use super::{report_save_failure, QuantityArgs};
use crate::context::Context;

/// Run the qty command.
pub fn run(args: QuantityArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    let Some(change) = cart.change_quantity(args.index, args.delta) else {
        bail!(
            "No row {} in the cart ({} rows)",
            args.index,
            cart.state().len()
        );
    };
    report_save_failure(&cart, &ctx.output);

    if ctx.output.is_json() {
        let (quantity, removed) = match &change {
            QuantityChange::Updated { quantity } => (Some(*quantity), None),
            QuantityChange::Removed(item) => (None, Some(item)),
        };
        ctx.output.json(&serde_json::json!({
            "index": args.index,
            "quantity": quantity,
            "removed": removed,
            "total_quantity": cart.total_quantity(),
            "total_value": cart.total_value(),
        }));
        return Ok(());
    }

    match change {
        QuantityChange::Updated { quantity } => {
            ctx.output
                .success(&format!("Row {} quantity is now {}", args.index, quantity));
        }
        QuantityChange::Removed(item) => {
            ctx.output.success(&format!("Removed {} from cart", item.name));
        }
    }
    ctx.output.kv(
        "total",
        &cart.total_value().display(&cart.config().currency_symbol),
    );
    Ok(())
}
