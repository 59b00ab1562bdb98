//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_cart::CartConfig;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["turbo-cart.toml", ".turbo-cart.toml", "turbo-cart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart engine settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Where the cart slot lives.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = if path.extension().and_then(|e| e.to_str()) == Some("json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config
            .cart
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the slot files, relative to the working directory
    /// unless absolute.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".turbo-cart".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Generate the contents of a default config file.
pub fn generate_default_config() -> String {
    let cart = CartConfig::default();
    format!(
        r#"# TurboCommerce cart configuration

[cart]
storage_key = "{key}"
# Unit price for products added without a usable price.
default_price = {price}
default_image = "{image}"
currency_symbol = "{symbol}"
notice_ttl_ms = {ttl}

[storage]
dir = "{dir}"
"#,
        key = cart.storage_key,
        price = cart.default_price,
        image = cart.default_image,
        symbol = cart.currency_symbol,
        ttl = cart.notice_ttl_ms,
        dir = default_storage_dir(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("turbo-cart.toml");
        std::fs::write(
            &path,
            r#"
[cart]
storage_key = "shop-cart"
default_price = 1999

[storage]
dir = "/var/lib/cart"
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.cart.storage_key, "shop-cart");
        assert_eq!(config.cart.default_price, 1999);
        assert_eq!(config.cart.default_image, turbo_cart::config::DEFAULT_IMAGE);
        assert_eq!(config.storage.dir, "/var/lib/cart");
    }

    #[test]
    fn test_load_json_and_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("turbo-cart.json");
        std::fs::write(&json, r#"{"cart": {"currency_symbol": "$"}}"#).unwrap();
        assert_eq!(CliConfig::load(&json).unwrap().cart.currency_symbol, "$");

        let toml = dir.path().join("turbo-cart.toml");
        std::fs::write(&toml, "").unwrap();
        assert_eq!(CliConfig::load(&toml).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("turbo-cart.toml");
        std::fs::write(&path, "[cart]\ndefault_price = -1\n").unwrap();
        assert!(CliConfig::load(&path).is_err());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }
}
