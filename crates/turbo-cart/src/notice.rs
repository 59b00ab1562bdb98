//! Transient notices and delayed UI effects.
//!
//! Notices are the only user-visible failure channel of the cart: they are
//! derived from state checks ("cart is empty"), never from errors.

use std::time::Duration;

use serde::Serialize;

use crate::cart::{CartStore, CheckoutSummary};
use crate::persistence::CartPersistence;
use crate::render::html::escape_html;

/// Icon shown next to a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoticeIcon {
    /// Confirmation tick, shown after an add.
    Check,
    /// Shopping cart, shown when the cart is empty.
    CartShopping,
    /// Credit card, shown after checkout.
    CreditCard,
}

impl NoticeIcon {
    /// Font Awesome class for the icon.
    pub fn class(&self) -> &'static str {
        match self {
            NoticeIcon::Check => "fa-check",
            NoticeIcon::CartShopping => "fa-cart-shopping",
            NoticeIcon::CreditCard => "fa-credit-card",
        }
    }
}

/// A toast-style message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Message markup. User-supplied parts are already escaped.
    pub message: String,
    /// Icon.
    pub icon: NoticeIcon,
    /// Time on screen before auto-dismiss.
    #[serde(skip)]
    pub ttl: Duration,
}

impl Notice {
    /// "Added X to cart."
    pub fn added(name: &str, ttl: Duration) -> Self {
        Self {
            message: format!("Added <strong>{}</strong> to cart.", escape_html(name)),
            icon: NoticeIcon::Check,
            ttl,
        }
    }

    /// "Your cart is empty."
    pub fn cart_empty(ttl: Duration) -> Self {
        Self {
            message: "Your cart is empty.".to_string(),
            icon: NoticeIcon::CartShopping,
            ttl,
        }
    }

    /// Order confirmation after checkout.
    pub fn order_placed(summary: &CheckoutSummary, currency_symbol: &str, ttl: Duration) -> Self {
        let noun = if summary.total_quantity == 1 { "item" } else { "items" };
        Self {
            message: format!(
                "Order placed: {} {} for <strong>{}</strong>.",
                summary.total_quantity,
                noun,
                escape_html(&summary.total_value.display(currency_symbol))
            ),
            icon: NoticeIcon::CreditCard,
            ttl,
        }
    }

    /// Whether a notice shown `elapsed` ago should be dismissed.
    pub fn is_expired(&self, elapsed: Duration) -> bool {
        elapsed >= self.ttl
    }

    /// Toast markup.
    pub fn to_html(&self) -> String {
        format!(
            r#"<i class="fa-solid {}"></i><span>{}</span>"#,
            self.icon.class(),
            self.message
        )
    }
}

/// Notice for opening the cart panel: only an empty cart warrants one.
pub fn notice_for_open<P: CartPersistence>(store: &CartStore<P>) -> Option<Notice> {
    if store.state().is_empty() {
        Some(Notice::cart_empty(store.config().notice_ttl()))
    } else {
        None
    }
}

/// Check out and produce the matching notice.
///
/// An empty cart yields the empty-cart notice and no summary.
pub fn checkout_with_notice<P: CartPersistence>(
    store: &mut CartStore<P>,
) -> (Option<CheckoutSummary>, Notice) {
    let ttl = store.config().notice_ttl();
    match store.checkout() {
        Some(summary) => {
            let notice = Notice::order_placed(&summary, &store.config().currency_symbol, ttl);
            (Some(summary), notice)
        }
        None => (None, Notice::cart_empty(ttl)),
    }
}

/// Token for UI work scheduled to run later (e.g. a dismiss timer).
///
/// Captures the store's clear epoch when scheduled. Before acting, the
/// delayed work asks [`DeferredEffect::is_current`]; if the cart has been
/// cleared in the meantime the effect is stale and must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredEffect {
    epoch: u64,
}

impl DeferredEffect {
    /// Schedule against the store's current state.
    pub fn schedule<P: CartPersistence>(store: &CartStore<P>) -> Self {
        Self {
            epoch: store.clear_epoch(),
        }
    }

    /// Whether the cart this effect was scheduled against is still the live
    /// one.
    pub fn is_current<P: CartPersistence>(&self, store: &CartStore<P>) -> bool {
        store.clear_epoch() == self.epoch
    }
}
