//! Persistence adapter: mirrors the cart into a durable key-value slot.
//!
//! The slot holds a JSON array of `{name, price, image, qty}` records. Reading
//! is forgiving: a missing or corrupt slot is an empty cart, and records
//! written by older versions that lack a field pick up the configured default.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use turbo_cache::{Cache, KvStore};

use crate::cart::{parse_price, CartState, LineItem};
use crate::config::CartConfig;
use crate::error::CartError;
use crate::money::Money;

/// Storage backend for the cart.
pub trait CartPersistence {
    /// Read the stored cart. Absent or unreadable data yields an empty cart.
    fn load(&self) -> CartState;

    /// Write the cart.
    fn save(&self, state: &CartState) -> Result<(), CartError>;
}

/// One line item as written to the slot.
///
/// Every field reads leniently: a missing, `null` or mistyped value takes the
/// same default as an absent one, so one damaged field never costs the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLineItem {
    /// Product name.
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    /// Unit price.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub price: Option<StoredPrice>,
    /// Image reference.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Quantity.
    #[serde(default = "default_qty", deserialize_with = "lenient_qty")]
    pub qty: i64,
}

fn default_qty() -> i64 {
    1
}

/// A value of the expected shape, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Lenient::<T>::deserialize(deserializer)?.into_option())
}

fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient(deserializer)?.unwrap_or_default())
}

fn lenient_qty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(lenient(deserializer)?.unwrap_or_else(default_qty))
}

/// A stored price: an integer, or the display text older pages saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredPrice {
    /// Integer amount.
    Amount(i64),
    /// Formatted text such as `"₹8,500"`.
    Text(String),
}

impl From<&LineItem> for StoredLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            price: Some(StoredPrice::Amount(item.unit_price.amount)),
            image: Some(item.image_ref.clone()),
            qty: item.quantity,
        }
    }
}

impl StoredLineItem {
    /// Convert back into a line item, filling gaps from the given defaults.
    ///
    /// A stored price of exactly 0 is kept (it was written for a free item);
    /// negative or unparseable prices fall back to `default_price`.
    pub fn into_line_item(self, default_price: Money, default_image: &str) -> LineItem {
        let unit_price = match self.price {
            Some(StoredPrice::Amount(amount)) if amount >= 0 => Money::new(amount),
            Some(StoredPrice::Text(text)) => parse_price(&text)
                .filter(|amount| *amount > 0)
                .map_or(default_price, Money::new),
            _ => default_price,
        };
        let image_ref = self
            .image
            .filter(|image| !image.trim().is_empty())
            .unwrap_or_else(|| default_image.to_string());
        LineItem {
            name: self.name,
            unit_price,
            image_ref,
            quantity: self.qty,
        }
    }
}

/// [`CartPersistence`] over one named slot of a [`KvStore`].
#[derive(Debug, Clone)]
pub struct SlotPersistence<S> {
    cache: Cache<S>,
    key: String,
    default_price: Money,
    default_image: String,
}

impl<S: KvStore> SlotPersistence<S> {
    /// Use the slot named by `config.storage_key` in `store`.
    pub fn new(store: S, config: &CartConfig) -> Self {
        Self {
            cache: Cache::new(store),
            key: config.storage_key.clone(),
            default_price: config.default_unit_price(),
            default_image: config.default_image.clone(),
        }
    }

    /// The slot name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying backend.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Read the raw stored records, if the slot holds a readable payload.
    ///
    /// Array entries that are not records at all are skipped; the rest of the
    /// array still loads.
    pub fn records(&self) -> Result<Option<Vec<StoredLineItem>>, CartError> {
        let Some(entries) = self
            .cache
            .get::<Option<Vec<Lenient<StoredLineItem>>>>(&self.key)?
            .flatten()
        else {
            return Ok(None);
        };

        let total = entries.len();
        let records: Vec<StoredLineItem> =
            entries.into_iter().filter_map(Lenient::into_option).collect();
        if records.len() < total {
            tracing::warn!(
                key = %self.key,
                skipped = total - records.len(),
                "skipping unreadable cart records"
            );
        }
        Ok(Some(records))
    }
}

impl<S: KvStore> CartPersistence for SlotPersistence<S> {
    fn load(&self) -> CartState {
        match self.records() {
            Ok(Some(records)) => CartState::from_items(
                records
                    .into_iter()
                    .map(|r| r.into_line_item(self.default_price, &self.default_image)),
            ),
            Ok(None) => CartState::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable cart slot");
                CartState::new()
            }
        }
    }

    fn save(&self, state: &CartState) -> Result<(), CartError> {
        let records: Vec<StoredLineItem> = state.items().iter().map(StoredLineItem::from).collect();
        self.cache.set(&self.key, &records)?;
        tracing::trace!(key = %self.key, items = records.len(), "cart saved");
        Ok(())
    }
}
