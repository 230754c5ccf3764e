//! Redis inventory implementation on a deadpool connection pool.

use async_trait::async_trait;
use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;

use crate::store::{InventoryError, InventoryStore};

/// Default connection pool size.
pub const DEFAULT_POOL_MAX: usize = 16;

/// Redis-backed inventory store.
///
/// Cloning is cheap: clones share the underlying pool.
#[derive(Clone)]
pub struct RedisInventory {
    pool: Pool,
}

impl RedisInventory {
    /// Build a pooled client from a `redis://` / `rediss://` URL.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Pool`] if the URL cannot be parsed or the
    /// pool cannot be created. No connection is attempted here; connection
    /// failures surface on first use.
    pub fn new(url: &str, pool_max: usize) -> Result<Self, InventoryError> {
        let mut cfg = Config::from_url(url);
        cfg.pool = Some(deadpool_redis::PoolConfig::new(pool_max));
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| InventoryError::Pool(e.to_string()))?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl InventoryStore for RedisInventory {
    async fn get(&self, product_id: &str) -> Result<Option<String>, InventoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| InventoryError::Pool(e.to_string()))?;
        let value: Option<String> = conn
            .get(product_id)
            .await
            .map_err(|e| InventoryError::Command(e.to_string()))?;
        tracing::debug!(product_id, hit = value.is_some(), "inventory get");
        Ok(value)
    }

    async fn get_many(&self, product_ids: &[String]) -> Result<Vec<Option<String>>, InventoryError> {
        // MGET requires at least one key.
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| InventoryError::Pool(e.to_string()))?;
        let values: Vec<Option<String>> = conn
            .mget(product_ids)
            .await
            .map_err(|e| InventoryError::Command(e.to_string()))?;
        tracing::debug!(
            requested = product_ids.len(),
            found = values.iter().filter(|v| v.is_some()).count(),
            "inventory mget"
        );
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_fails_at_pool_creation() {
        let result = RedisInventory::new("not a redis url", DEFAULT_POOL_MAX);
        assert!(matches!(result, Err(InventoryError::Pool(_))));
    }

    #[test]
    fn valid_url_builds_pool_without_connecting() {
        // No server is listening here; pool creation must still succeed.
        let result = RedisInventory::new("redis://127.0.0.1:1", 2);
        assert!(result.is_ok());
    }
}
