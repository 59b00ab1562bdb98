//! View models derived from cart state.

use serde::Serialize;

use crate::cart::CartState;
use crate::config::CartConfig;

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// Display position; the index the row's controls act on.
    pub index: usize,
    /// Product name.
    pub name: String,
    /// Image reference.
    pub image_ref: String,
    /// Formatted unit price.
    pub unit_price: String,
    /// Quantity.
    pub quantity: i64,
    /// Formatted line total.
    pub line_total: String,
}

/// Body of the cart panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "lowercase")]
pub enum PanelBody {
    /// Placeholder for an empty cart.
    Empty,
    /// One row per line item, in cart order.
    Rows(Vec<RowView>),
}

/// Everything the cart panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    /// Rows or the empty placeholder.
    pub body: PanelBody,
    /// Formatted grand total.
    pub total: String,
}

impl PanelView {
    /// Check if the panel shows the empty placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, PanelBody::Empty)
    }

    /// Rendered rows (empty for the placeholder).
    pub fn rows(&self) -> &[RowView] {
        match &self.body {
            PanelBody::Empty => &[],
            PanelBody::Rows(rows) => rows.as_slice(),
        }
    }
}

/// Pure projection of [`CartState`] into display form.
#[derive(Debug, Clone)]
pub struct CartRenderer {
    currency_symbol: String,
}

impl CartRenderer {
    /// Create a renderer using the given currency prefix.
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Create a renderer from engine configuration.
    pub fn from_config(config: &CartConfig) -> Self {
        Self::new(config.currency_symbol.clone())
    }

    /// Build the panel view.
    pub fn render_panel(&self, state: &CartState) -> PanelView {
        let total = state.total_value().display(&self.currency_symbol);
        if state.is_empty() {
            return PanelView {
                body: PanelBody::Empty,
                total,
            };
        }

        let rows = state
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| RowView {
                index,
                name: item.name.clone(),
                image_ref: item.image_ref.clone(),
                unit_price: item.unit_price.display(&self.currency_symbol),
                quantity: item.quantity,
                line_total: item.line_total().display(&self.currency_symbol),
            })
            .collect();

        PanelView {
            body: PanelBody::Rows(rows),
            total,
        }
    }

    /// Badge text: the total quantity.
    pub fn render_badge_count(&self, state: &CartState) -> String {
        state.total_quantity().to_string()
    }
}

impl Default for CartRenderer {
    fn default() -> Self {
        Self::from_config(&CartConfig::default())
    }
}
