//! # Rates Cache
//!
//! Concrete cache implementations (adapters) for the rates gateway.
//! This crate provides backends that implement the `RateCache` port.

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!("Enable a cache feature: `memory` or `redis`.");

use std::time::Duration;

use async_trait::async_trait;

use rates_types::{CacheError, RateCache};

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "redis")]
pub mod redis;

/// Unified cache wrapper that handles both backends.
pub struct Cache {
    #[cfg(all(feature = "memory", not(feature = "redis")))]
    inner: memory::MemoryCache,
    #[cfg(feature = "redis")]
    inner: redis::RedisCache,
}

/// Build a cache from a cache URL.
///
/// `redis://…` selects the Redis backend (requires the `redis` feature);
/// anything else (e.g. `memory://`) is the process-local TTL cache.
///
/// # Examples
///
/// ```ignore
/// // In-memory (with `memory` feature)
/// let cache = build_cache("memory://").await?;
///
/// // Redis (with `redis` feature)
/// let cache = build_cache("redis://127.0.0.1:6379").await?;
/// ```
pub async fn build_cache(cache_url: &str) -> anyhow::Result<Cache> {
    Cache::new(cache_url).await
}

impl Cache {
    #[cfg(all(feature = "memory", not(feature = "redis")))]
    pub async fn new(cache_url: &str) -> anyhow::Result<Self> {
        if cache_url.starts_with("redis://") {
            anyhow::bail!("cache URL {cache_url:?} requires the `redis` feature");
        }
        Ok(Self {
            inner: memory::MemoryCache::new(),
        })
    }

    #[cfg(feature = "redis")]
    pub async fn new(cache_url: &str) -> anyhow::Result<Self> {
        let inner = redis::RedisCache::connect(cache_url).await?;
        Ok(Self { inner })
    }
}

// Re-export individual backends for direct use if needed
#[cfg(feature = "memory")]
pub use memory::MemoryCache;
#[cfg(feature = "redis")]
pub use self::redis::RedisCache;

// ─────────────────────────────────────────────────────────────────────────────
// Implement RateCache for Cache (delegation)
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RateCache for Cache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        self.inner.set(key, value, ttl).await
    }
}
