//! Redis cache backend.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use rates_types::{CacheError, RateCache};

/// Redis-backed cache over a shared async connection manager.
///
/// The manager reconnects on its own; individual command failures surface
/// as `CacheError::Backend` for the service layer to absorb.
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    /// Connects to the Redis server at `redis_url`.
    pub async fn connect(redis_url: &str) -> anyhow::Result<Self> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        tracing::info!("connected to redis cache");
        Ok(Self { conn })
    }
}

fn backend_err(err: redis::RedisError) -> CacheError {
    CacheError::Backend(err.to_string())
}

#[async_trait]
impl RateCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(backend_err)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(backend_err)
    }
}
