//! HTML markup for the cart panel.

use crate::render::{PanelBody, PanelView, RowView};

/// Markup shown when the cart has no items.
pub const EMPTY_CART_HTML: &str = r#"<div class="cart-empty">
    <i class="fa-solid fa-cart-shopping"></i>
    <p>Your cart is empty.</p>
</div>"#;

/// Render the rows container content.
pub fn render_items_html(view: &PanelView) -> String {
    match &view.body {
        PanelBody::Empty => EMPTY_CART_HTML.to_string(),
        PanelBody::Rows(rows) => rows
            .iter()
            .map(render_row)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render a single cart row. Controls carry the row index in
/// `data-index`; the page script maps them back to store operations.
pub fn render_row(row: &RowView) -> String {
    format!(
        r#"<div class="cart-item" data-index="{index}">
    <img class="cart-item-image" src="{image}" alt="{name}">
    <div class="cart-item-info">
        <h4 class="cart-item-name">{name}</h4>
        <span class="cart-item-price">{price}</span>
    </div>
    <div class="cart-item-qty">
        <button class="qty-btn" data-action="change-quantity" data-index="{index}" data-delta="-1">-</button>
        <span class="qty-value">{quantity}</span>
        <button class="qty-btn" data-action="change-quantity" data-index="{index}" data-delta="1">+</button>
    </div>
    <button class="cart-item-remove" data-action="remove-item" data-index="{index}">
        <i class="fa-solid fa-trash"></i>
    </button>
</div>"#,
        index = row.index,
        image = escape_html(&row.image_ref),
        name = escape_html(&row.name),
        price = escape_html(&row.unit_price),
        quantity = row.quantity,
    )
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
