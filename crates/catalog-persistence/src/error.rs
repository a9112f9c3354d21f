//! Persistence layer error types.
//!
//! Store failures surface to callers; cache failures never leave the
//! coordinator boundary.

use thiserror::Error;

/// Durable store failure (unreachable, rejected statement).
#[derive(Debug, Error)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self(err.to_string())
    }
}

/// Cache failure. Internal only: the coordinator absorbs every one of
/// these, logging and degrading to a miss or a no-op.
#[derive(Debug, Error)]
#[error("cache error: {0}")]
pub struct CacheError(pub String);

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        Self(err.to_string())
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

/// Errors surfaced by the catalog coordinator.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The durable store could not serve a read.
    #[error("store read failed: {0}")]
    StoreRead(#[source] StoreError),

    /// The durable store rejected or could not durably commit a write.
    #[error("store write failed: {0}")]
    StoreWrite(#[source] StoreError),

    /// Update/delete matched zero rows. Does not trigger invalidation.
    #[error("product not found: id {id}")]
    NotFound { id: i64 },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
