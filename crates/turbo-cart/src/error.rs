//! Cart error types.

use thiserror::Error;

/// Errors that can surface from the cart engine.
///
/// None of these escape the store's mutation API; they are returned by the
/// persistence layer and by configuration validation only.
#[derive(Error, Debug)]
pub enum CartError {
    /// The persistence slot rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(#[from] turbo_cache::CacheError),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
