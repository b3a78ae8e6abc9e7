//! Cache port.
//!
//! A string-valued key-value store with expiration. Serialization is owned
//! by the caller, keeping the cache abstraction type-agnostic.

use std::time::Duration;

/// Error type for cache operations. Callers treat a failed read as a miss
/// and a failed write as a no-op; neither may fail a request.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Port trait for the rate cache.
#[async_trait::async_trait]
pub trait RateCache: Send + Sync + 'static {
    /// Looks up a raw cached value. `Ok(None)` on a missing key.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores a raw value with a time-to-live. Eviction is owned by the
    /// backend.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
}
