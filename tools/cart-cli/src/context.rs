//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use turbo_cache::FileStore;
use turbo_cart::{CartStore, SlotPersistence};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// The cart store as the CLI uses it: one slot in a directory on disk.
pub type FileCart = CartStore<SlotPersistence<FileStore>>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Some(path) = &config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Directory holding the cart slot.
    pub fn storage_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.dir)
    }

    /// Open the cart from its slot.
    pub fn open_cart(&self) -> Result<FileCart> {
        let dir = self.storage_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open cart storage at {}", dir.display()))?;
        let persistence = SlotPersistence::new(store, &self.config.cart);
        Ok(CartStore::load(persistence, self.config.cart.clone()))
    }
}

/// Find a config file in the directory tree, starting at `start`.
///
/// A file that exists but fails to parse is an error, not a reason to keep
/// searching.
fn find_config(start: &Path) -> Result<Option<(CliConfig, PathBuf)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                let config = CliConfig::load(&candidate)?;
                return Ok(Some((config, candidate)));
            }
        }

        if !current.pop() {
            return Ok(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".turbo-cart.toml"), "[cart]\ndefault_price = 10\n").unwrap();

        let (config, path) = find_config(&nested).unwrap().unwrap();
        assert_eq!(config.cart.default_price, 10);
        assert_eq!(path, root.path().join(".turbo-cart.toml"));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("turbo-cart.toml"), "[cart]\ndefault_price = 10\n").unwrap();
        std::fs::write(nested.join("turbo-cart.toml"), "[cart]\ndefault_price = 20\n").unwrap();

        let (config, _) = find_config(&nested).unwrap().unwrap();
        assert_eq!(config.cart.default_price, 20);
    }

    #[test]
    fn test_find_config_reports_broken_file() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("turbo-cart.toml"), "[cart\n").unwrap();
        assert!(find_config(root.path()).is_err());
    }
}
