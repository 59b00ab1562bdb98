//! Place the order and empty the cart.

use anyhow::Result;
use turbo_cart::notice::checkout_with_notice;

use super::{report_save_failure, CheckoutArgs};
use crate::context::Context;
use crate::output::plain_text;

/// Run the checkout command.
pub fn run(_args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    let (summary, notice) = checkout_with_notice(&mut cart);
    report_save_failure(&cart, &ctx.output);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "placed": summary.is_some(),
            "items": summary.as_ref().map(|s| &s.items),
            "total_quantity": summary.as_ref().map(|s| s.total_quantity),
            "total_value": summary.as_ref().map(|s| s.total_value),
            "notice": notice,
        }));
        return Ok(());
    }

    match summary {
        Some(summary) => {
            ctx.output.success(&plain_text(&notice.message));
            for item in &summary.items {
                ctx.output.kv(&item.name, &format!("x{}", item.quantity));
            }
        }
        None => ctx.output.info(&plain_text(&notice.message)),
    }
    Ok(())
}
