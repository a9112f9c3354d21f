//! # Repository Module
//!
//! Durable store access: trait seam plus the PostgreSQL implementation.

pub mod pg_impl;
pub mod traits;

pub use pg_impl::{PgProductStore, StoreConfig};
pub use traits::ProductStore;
