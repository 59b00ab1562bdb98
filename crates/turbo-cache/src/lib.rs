//! Type-safe key-value storage slots for TurboCommerce.
//!
//! Provides a simple, ergonomic API for keeping small JSON documents in a
//! key-value backend. Two backends ship with the crate:
//!
//! - [`MemoryStore`]: in-process, shareable handle, with optional quota and
//!   a disabled mode for exercising failure paths.
//! - [`FileStore`]: one file per key under a directory, durable across runs.
//!
//! # Example
//!
//! ```rust
//! use turbo_cache::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Entry {
//!     name: String,
//!     qty: i64,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//! let entries = vec![Entry { name: "Watch X".into(), qty: 1 }];
//!
//! cache.set("cart", &entries)?;
//! let loaded: Option<Vec<Entry>> = cache.get("cart")?;
//! assert_eq!(loaded, Some(entries));
//!
//! cache.delete("cart")?;
//! # Ok::<(), turbo_cache::CacheError>(())
//! ```

mod error;
mod file;
mod kv;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
