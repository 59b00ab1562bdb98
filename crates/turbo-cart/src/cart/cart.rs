//! Cart state and line item types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A product entry in the cart.
///
/// The product name is the identity key: a cart never holds two line items
/// with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name (identity).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Image reference (URL or path).
    pub image_ref: String,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl LineItem {
    /// Create a new line item with quantity 1.
    pub fn new(name: impl Into<String>, unit_price: Money, image_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
            quantity: 1,
        }
    }

    /// Set the quantity, clamped to `1..=MAX_QUANTITY_PER_ITEM`.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity.clamp(1, MAX_QUANTITY_PER_ITEM);
        self
    }

    /// Line total (unit_price * quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_multiply(self.quantity)
    }
}

/// Result of adding a product to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was appended at `index`.
    Added { index: usize },
    /// An existing line item's quantity went up.
    Incremented { index: usize, quantity: i64 },
    /// The existing line item is already at [`MAX_QUANTITY_PER_ITEM`].
    AtLimit { index: usize },
    /// The name was blank; nothing changed.
    Ignored,
}

impl AddOutcome {
    /// Whether the cart changed.
    pub fn changed(&self) -> bool {
        matches!(self, AddOutcome::Added { .. } | AddOutcome::Incremented { .. })
    }
}

/// Result of a quantity change on an existing line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    /// The item stays in the cart with the new quantity.
    Updated { quantity: i64 },
    /// The quantity dropped to zero or below and the item was removed.
    Removed(LineItem),
}

/// The ordered list of line items in a cart.
///
/// Insertion order is display order. Totals are derived on every call, never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from possibly untrusted items.
    ///
    /// Items with a blank name or a quantity below 1 are dropped; repeated
    /// names are merged into the first occurrence with their quantities summed.
    /// Quantities are capped at [`MAX_QUANTITY_PER_ITEM`].
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut state = Self::new();
        for item in items {
            if item.name.trim().is_empty() || item.quantity < 1 {
                tracing::debug!(product = %item.name, quantity = item.quantity, "dropping invalid line item");
                continue;
            }
            match state.position(&item.name) {
                Some(index) => {
                    let existing = &mut state.items[index];
                    existing.quantity = existing
                        .quantity
                        .saturating_add(item.quantity)
                        .min(MAX_QUANTITY_PER_ITEM);
                }
                None => {
                    let quantity = item.quantity.min(MAX_QUANTITY_PER_ITEM);
                    state.items.push(LineItem { quantity, ..item });
                }
            }
        }
        state
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line item at a display index.
    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Get a line item by product name.
    pub fn find(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Display index of a product name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }

    /// Total item count (sum of quantities).
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Total value (sum of unit_price * quantity).
    pub fn total_value(&self) -> Money {
        Money::sum(self.items.iter().map(LineItem::line_total))
    }

    pub(crate) fn add(&mut self, name: &str, unit_price: Money, image_ref: &str) -> AddOutcome {
        if name.trim().is_empty() {
            return AddOutcome::Ignored;
        }

        if let Some(index) = self.position(name) {
            let item = &mut self.items[index];
            if item.quantity >= MAX_QUANTITY_PER_ITEM {
                return AddOutcome::AtLimit { index };
            }
            item.quantity += 1;
            return AddOutcome::Incremented {
                index,
                quantity: item.quantity,
            };
        }

        self.items.push(LineItem::new(name, unit_price, image_ref));
        AddOutcome::Added {
            index: self.items.len() - 1,
        }
    }

    pub(crate) fn change_quantity(&mut self, index: usize, delta: i64) -> Option<QuantityChange> {
        let item = self.items.get_mut(index)?;
        let quantity = item.quantity.saturating_add(delta);
        if quantity <= 0 {
            return Some(QuantityChange::Removed(self.items.remove(index)));
        }
        item.quantity = quantity.min(MAX_QUANTITY_PER_ITEM);
        Some(QuantityChange::Updated {
            quantity: item.quantity,
        })
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}
