//! # Repository Traits
//!
//! Abstract interface over the durable product store.
//! Implementations can be swapped for different backends (PostgreSQL,
//! in-memory fakes for tests).

use async_trait::async_trait;

use crate::error::StoreError;
use catalog_domain::Product;

/// Durable store for Product entities. Source of truth.
///
/// Implementations must be safe for concurrent use; each call is a
/// single atomic statement against the backend.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Read the full product set, ordered ascending by `id`.
    ///
    /// The ordering is a contract, not incidental: cached snapshots are
    /// built from this result and must preserve it.
    async fn list_ordered(&self) -> Result<Vec<Product>, StoreError>;

    /// Insert a product; returns the store-assigned id once the write
    /// is durably committed.
    async fn insert(&self, name: &str, price: f64) -> Result<i64, StoreError>;

    /// Update a product by id; returns the number of rows affected.
    async fn update(&self, id: i64, name: &str, price: f64) -> Result<u64, StoreError>;

    /// Delete a product by id; returns the number of rows affected.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;

    /// Trivial round-trip for liveness probing.
    async fn ping(&self) -> Result<(), StoreError>;
}
