//! # Catalog Persistence Library
//!
//! Cache-aside persistence layer for the catalog read service.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Request Handlers                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                Catalog Cache Coordinator                     │
//! │     (cache-aside read, commit-then-invalidate writes)        │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                   │
//!                    ▼                   ▼
//! ┌─────────────────────────┐   ┌──────────────────────────────┐
//! │     Redis Cache         │   │       PostgreSQL             │
//! │  (Snapshot, advisory)   │   │   (Source of Truth)          │
//! └─────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! The coordinator is the only component with business-logic branching;
//! the two leaves are stateless adapters behind trait seams
//! ([`ProductStore`], [`SnapshotCache`]) so tests can substitute
//! in-memory fakes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use catalog_persistence::{
//!     CacheConfig, CatalogCoordinator, PgProductStore, RedisSnapshotCache, StoreConfig,
//! };
//!
//! let store = Arc::new(PgProductStore::connect(&StoreConfig::default()).await?);
//! let cache = Arc::new(RedisSnapshotCache::connect(&CacheConfig::default()).await?);
//! let catalog = CatalogCoordinator::new(store, cache);
//!
//! let (items, origin) = catalog.list_products().await?;
//! ```

pub mod cache;
pub mod coordinator;
pub mod error;
pub mod health;
pub mod repository;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use cache::{CacheConfig, RedisSnapshotCache, SnapshotCache};
pub use coordinator::{CatalogCoordinator, DEFAULT_SNAPSHOT_TTL, SNAPSHOT_KEY};
pub use error::{CacheError, CatalogError, Result, StoreError};
pub use health::{HealthAggregator, HealthReport, HealthStatus};
pub use repository::{PgProductStore, ProductStore, StoreConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
