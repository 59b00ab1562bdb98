//! Add a product to the cart.

use anyhow::Result;
use turbo_cart::cart::AddOutcome;
use turbo_cart::notice::Notice;
use turbo_cart::PriceInput;

use super::{report_save_failure, AddArgs};
use crate::context::Context;
use crate::output::plain_text;

/// Run the add command.
pub fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    let price = if args.free {
        PriceInput::Free
    } else {
        PriceInput::from(args.price)
    };
    let outcome = cart.add_item(&args.name, price, args.image.as_deref());
    report_save_failure(&cart, &ctx.output);

    let name = args.name.trim();
    let notice = outcome
        .changed()
        .then(|| Notice::added(name, cart.config().notice_ttl()));

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "outcome": outcome_label(&outcome),
            "item": outcome_index(&outcome).and_then(|i| cart.state().get(i)),
            "total_quantity": cart.total_quantity(),
            "total_value": cart.total_value(),
            "notice": notice,
        }));
        return Ok(());
    }

    match outcome {
        AddOutcome::Added { .. } | AddOutcome::Incremented { .. } => {
            if let Some(notice) = &notice {
                ctx.output.success(&plain_text(&notice.message));
            }
            if let AddOutcome::Incremented { quantity, .. } = outcome {
                ctx.output.kv("quantity", &quantity.to_string());
            }
        }
        AddOutcome::AtLimit { index } => {
            ctx.output
                .warn(&format!("Row {} is already at the maximum quantity", index));
        }
        AddOutcome::Ignored => {
            ctx.output.warn("Product name is empty; nothing added");
        }
    }

    ctx.output.kv(
        "total",
        &cart.total_value().display(&cart.config().currency_symbol),
    );
    Ok(())
}

fn outcome_label(outcome: &AddOutcome) -> &'static str {
    match outcome {
        AddOutcome::Added { .. } => "added",
        AddOutcome::Incremented { .. } => "incremented",
        AddOutcome::AtLimit { .. } => "at_limit",
        AddOutcome::Ignored => "ignored",
    }
}

fn outcome_index(outcome: &AddOutcome) -> Option<usize> {
    match *outcome {
        AddOutcome::Added { index }
        | AddOutcome::Incremented { index, .. }
        | AddOutcome::AtLimit { index } => Some(index),
        AddOutcome::Ignored => None,
    }
}
