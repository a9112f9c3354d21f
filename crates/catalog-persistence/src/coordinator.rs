//! # Catalog Cache Coordinator
//!
//! The only component with business-logic branching. Implements the
//! cache-aside consistency protocol over the two leaf adapters:
//!
//! - **Reads** check the snapshot cache first and fall back to the
//!   durable store on a miss, repopulating the cache afterward.
//! - **Writes** commit to the store first, then invalidate the snapshot.
//!   The commit must be observed before invalidation is issued, so a
//!   concurrent reader cannot repopulate the cache with pre-write data
//!   *after* the invalidation that was meant to flush it.
//! - **Cache failures never fail a request** the store could satisfy.
//!   They are logged and degraded to a miss or a no-op. Store failures
//!   propagate immediately; there is no retry policy here.
//!
//! Staleness is bounded: at most one stale read per missed invalidation,
//! self-healing once the snapshot TTL elapses.

use std::sync::Arc;
use std::time::Duration;

use catalog_domain::{Origin, Product};

use crate::cache::SnapshotCache;
use crate::error::{CatalogError, Result};
use crate::repository::ProductStore;

/// Fixed logical key for the catalog snapshot.
pub const SNAPSHOT_KEY: &str = "products";

/// Default snapshot time-to-live.
pub const DEFAULT_SNAPSHOT_TTL: Duration = Duration::from_secs(120);

/// Coordinates the durable store and the snapshot cache.
///
/// Holds no mutable state beyond the two shared client handles; safe
/// for concurrent use from any number of request tasks. Consistency
/// relies on the store's per-statement atomicity and the cache's atomic
/// set/delete, not on any in-process lock.
pub struct CatalogCoordinator {
    store: Arc<dyn ProductStore>,
    cache: Arc<dyn SnapshotCache>,
    snapshot_ttl: Duration,
}

impl CatalogCoordinator {
    /// Create a coordinator with the default snapshot TTL.
    pub fn new(store: Arc<dyn ProductStore>, cache: Arc<dyn SnapshotCache>) -> Self {
        Self::with_ttl(store, cache, DEFAULT_SNAPSHOT_TTL)
    }

    /// Create a coordinator with an explicit snapshot TTL.
    pub fn with_ttl(
        store: Arc<dyn ProductStore>,
        cache: Arc<dyn SnapshotCache>,
        snapshot_ttl: Duration,
    ) -> Self {
        Self {
            store,
            cache,
            snapshot_ttl,
        }
    }

    /// List all products, ordered ascending by id.
    ///
    /// Serves from the snapshot cache when possible; on a miss (or any
    /// cache malfunction) reads the store and repopulates the cache
    /// best-effort. The returned [`Origin`] tags where the data came
    /// from.
    ///
    /// # Errors
    ///
    /// [`CatalogError::StoreRead`] if the cache cannot serve the read
    /// and the store is unreachable or rejects the query.
    pub async fn list_products(&self) -> Result<(Vec<Product>, Origin)> {
        match self.cache.get_products(SNAPSHOT_KEY).await {
            Ok(Some(items)) => {
                tracing::debug!(count = items.len(), "snapshot hit");
                return Ok((items, Origin::Cache));
            }
            Ok(None) => {
                tracing::debug!("snapshot miss");
            }
            Err(e) => {
                tracing::warn!(error = %e, "cache read failed, treating as miss");
            }
        }

        let items = self
            .store
            .list_ordered()
            .await
            .map_err(CatalogError::StoreRead)?;

        if let Err(e) = self
            .cache
            .set_products(SNAPSHOT_KEY, &items, self.snapshot_ttl)
            .await
        {
            tracing::warn!(error = %e, "failed to populate snapshot");
        }

        Ok((items, Origin::Database))
    }

    /// Create a product; returns the store-assigned id.
    ///
    /// The snapshot is invalidated only after the store confirms the
    /// write is durable.
    ///
    /// # Errors
    ///
    /// [`CatalogError::StoreWrite`] if the store rejects the insert or
    /// cannot be reached. No invalidation is issued in that case.
    pub async fn create_product(&self, name: &str, price: f64) -> Result<i64> {
        let id = self
            .store
            .insert(name, price)
            .await
            .map_err(CatalogError::StoreWrite)?;

        self.invalidate_snapshot().await;

        tracing::debug!(id, "product created");
        Ok(id)
    }

    /// Replace a product's name and price.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] if no row matched `id` (the snapshot
    /// is left intact: nothing changed); [`CatalogError::StoreWrite`]
    /// on store failure.
    pub async fn update_product(&self, id: i64, name: &str, price: f64) -> Result<()> {
        let affected = self
            .store
            .update(id, name, price)
            .await
            .map_err(CatalogError::StoreWrite)?;

        if affected == 0 {
            return Err(CatalogError::NotFound { id });
        }

        self.invalidate_snapshot().await;

        tracing::debug!(id, "product updated");
        Ok(())
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Same shape as [`Self::update_product`]: [`CatalogError::NotFound`]
    /// on zero rows affected, [`CatalogError::StoreWrite`] on store
    /// failure.
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        let affected = self
            .store
            .delete(id)
            .await
            .map_err(CatalogError::StoreWrite)?;

        if affected == 0 {
            return Err(CatalogError::NotFound { id });
        }

        self.invalidate_snapshot().await;

        tracing::debug!(id, "product deleted");
        Ok(())
    }

    /// Best-effort snapshot invalidation, issued after a committed
    /// write and before returning to the caller. Idempotent: deleting
    /// an absent key is a no-op. Failure is logged, never propagated;
    /// the TTL bounds the resulting stale window.
    async fn invalidate_snapshot(&self) {
        if let Err(e) = self.cache.delete(SNAPSHOT_KEY).await {
            tracing::warn!(error = %e, "snapshot invalidation failed, stale window bounded by TTL");
        }
    }
}
