//! # Cache Module
//!
//! Redis snapshot cache: advisory, never authoritative.

pub mod redis_client;
pub mod traits;

pub use redis_client::{CacheConfig, RedisSnapshotCache};
pub use traits::SnapshotCache;
