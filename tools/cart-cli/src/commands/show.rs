//! Show the cart panel.

use anyhow::Result;
use turbo_cart::notice::notice_for_open;
use turbo_cart::render::{commit, html, CartRenderer, HtmlSurface};

use super::ShowArgs;
use crate::context::Context;
use crate::output::plain_text;

const COLUMN_WIDTHS: [usize; 5] = [3, 28, 12, 5, 12];

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;
    let renderer = CartRenderer::from_config(cart.config());
    let view = renderer.render_panel(cart.state());
    let badge = renderer.render_badge_count(cart.state());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "panel": view,
            "badge": badge,
            "notice": notice_for_open(&cart),
        }));
        return Ok(());
    }

    if args.html {
        let mut surface = HtmlSurface::full();
        commit(&mut surface, &view, &badge);
        ctx.output.raw(surface.items.as_deref().unwrap_or(html::EMPTY_CART_HTML));
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({})", badge));
    if let Some(notice) = notice_for_open(&cart) {
        ctx.output.info(&plain_text(&notice.message));
        return Ok(());
    }

    ctx.output
        .table_row(&["#", "Product", "Price", "Qty", "Subtotal"], &COLUMN_WIDTHS);
    for row in view.rows() {
        let index = row.index.to_string();
        let quantity = row.quantity.to_string();
        ctx.output.table_row(
            &[
                index.as_str(),
                row.name.as_str(),
                row.unit_price.as_str(),
                quantity.as_str(),
                row.line_total.as_str(),
            ],
            &COLUMN_WIDTHS,
        );
    }
    ctx.output.kv("total", &view.total);
    ctx.output.debug(&format!(
        "slot '{}' in {}",
        cart.config().storage_key,
        ctx.storage_dir().display()
    ));
    Ok(())
}
