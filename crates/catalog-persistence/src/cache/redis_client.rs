//! # Redis Cache Layer
//!
//! Redis client wrapper with typed snapshot operations.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client};

use crate::cache::traits::SnapshotCache;
use crate::error::CacheError;
use catalog_domain::Product;

/// Redis cache configuration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub host: String,
    pub port: u16,
    pub connect_timeout: Duration,
    /// Time-to-live for the catalog snapshot.
    pub snapshot_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: "redis".to_string(),
            port: 6379,
            connect_timeout: Duration::from_secs(3),
            snapshot_ttl: Duration::from_secs(120),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub fn url(&self) -> String {
        format!("redis://{}:{}", self.host, self.port)
    }
}

/// Redis snapshot cache backed by a multiplexed connection manager.
///
/// The manager is a thin shared wrapper, cheap to clone and safe for
/// concurrent use across request tasks.
#[derive(Clone)]
pub struct RedisSnapshotCache {
    conn: ConnectionManager,
}

impl RedisSnapshotCache {
    /// Connect a new cache client.
    pub async fn connect(config: &CacheConfig) -> Result<Self, CacheError> {
        let client = Client::open(config.url())?;
        let manager_config = ConnectionManagerConfig::new()
            .set_connection_timeout(config.connect_timeout)
            .set_response_timeout(config.connect_timeout);
        let conn = ConnectionManager::new_with_config(client, manager_config).await?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl SnapshotCache for RedisSnapshotCache {
    async fn get_products(&self, key: &str) -> Result<Option<Vec<Product>>, CacheError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let parsed = serde_json::from_str(&json)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    async fn set_products(
        &self,
        key: &str,
        items: &[Product],
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let json = serde_json::to_string(items)?;
        let _: () = conn.set_ex(key, json, ttl.as_secs()).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        // DEL returns the number of keys removed; zero is still success.
        let _: i64 = conn.del(key).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
