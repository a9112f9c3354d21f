//! Abstract interface over the snapshot cache.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CacheError;
use catalog_domain::Product;

/// Fast key-value cache holding derived product snapshots.
///
/// Every operation is advisory: callers must treat any error as a miss
/// or a no-op and carry on.
#[async_trait]
pub trait SnapshotCache: Send + Sync {
    /// Fetch a snapshot. `Ok(None)` covers both absence and expiry.
    async fn get_products(&self, key: &str) -> Result<Option<Vec<Product>>, CacheError>;

    /// Store a snapshot with a time-to-live.
    async fn set_products(
        &self,
        key: &str,
        items: &[Product],
        ttl: Duration,
    ) -> Result<(), CacheError>;

    /// Delete a key. Deleting an absent key is a no-op, not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Liveness ping.
    async fn ping(&self) -> Result<(), CacheError>;
}
