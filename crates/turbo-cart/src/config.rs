//! Cart engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::money::Money;

/// Default persistence slot name.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// Price used when an add-to-cart trigger carries no usable price.
pub const DEFAULT_PRICE: i64 = 4999;

/// Image used when an add-to-cart trigger carries no image.
pub const DEFAULT_IMAGE: &str = "images/placeholder.png";

/// Currency prefix for formatted prices.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "\u{20b9}";

/// How long a notice stays on screen before auto-dismissing.
pub const DEFAULT_NOTICE_TTL_MS: u64 = 3000;

/// Cart engine configuration.
///
/// Every field has a default, so an empty table deserializes to
/// [`CartConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Name of the persistence slot.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Fallback unit price.
    #[serde(default = "default_price")]
    pub default_price: i64,

    /// Fallback image reference.
    #[serde(default = "default_image")]
    pub default_image: String,

    /// Prefix used when formatting prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Notice lifetime in milliseconds.
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_price() -> i64 {
    DEFAULT_PRICE
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_notice_ttl_ms() -> u64 {
    DEFAULT_NOTICE_TTL_MS
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_price: default_price(),
            default_image: default_image(),
            currency_symbol: default_currency_symbol(),
            notice_ttl_ms: default_notice_ttl_ms(),
        }
    }
}

impl CartConfig {
    /// Set the persistence slot name.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the fallback price.
    pub fn with_default_price(mut self, price: i64) -> Self {
        self.default_price = price;
        self
    }

    /// Set the fallback image.
    pub fn with_default_image(mut self, image: impl Into<String>) -> Self {
        self.default_image = image.into();
        self
    }

    /// Set the currency prefix.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Fallback price as [`Money`].
    pub fn default_unit_price(&self) -> Money {
        Money::new(self.default_price)
    }

    /// Notice lifetime.
    pub fn notice_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.notice_ttl_ms)
    }

    /// Check the configuration for values the engine cannot honor.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.storage_key.trim().is_empty() {
            return Err(CartError::InvalidConfig(
                "storage_key must not be empty".to_string(),
            ));
        }
        if self.default_price <= 0 {
            return Err(CartError::InvalidConfig(format!(
                "default_price must be positive, got {}",
                self.default_price
            )));
        }
        if self.default_image.trim().is_empty() {
            return Err(CartError::InvalidConfig(
                "default_image must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CartConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.default_price, DEFAULT_PRICE);
    }

    #[test]
    fn test_partial_config() {
        let config: CartConfig =
            serde_json::from_str(r#"{"default_price": 100, "currency_symbol": "$"}"#).unwrap();
        assert_eq!(config.default_price, 100);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.default_image, DEFAULT_IMAGE);
    }

    #[test]
    fn test_validate() {
        assert!(CartConfig::default().validate().is_ok());
        assert!(CartConfig::default().with_storage_key(" ").validate().is_err());
        assert!(CartConfig::default().with_default_price(0).validate().is_err());
        assert!(CartConfig::default().with_default_image("").validate().is_err());
    }

    #[test]
    fn test_notice_ttl() {
        assert_eq!(CartConfig::default().notice_ttl().as_millis(), 3000);
    }
}
