//! # Health Aggregator
//!
//! Composite liveness over the two leaf adapters. Probes never mutate
//! state and never raise past this boundary: `check` always returns a
//! report value.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::SnapshotCache;
use crate::repository::ProductStore;

/// Composite liveness status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
        }
    }
}

/// Outcome of a health check. `error` carries the message of the first
/// failing probe (both, joined, if both fail).
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub database: bool,
    pub cache: bool,
    pub error: Option<String>,
}

impl HealthReport {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Probes the durable store and the snapshot cache, each bounded by an
/// independently configurable timeout.
pub struct HealthAggregator {
    store: Arc<dyn ProductStore>,
    cache: Arc<dyn SnapshotCache>,
    store_timeout: Duration,
    cache_timeout: Duration,
}

impl HealthAggregator {
    pub fn new(
        store: Arc<dyn ProductStore>,
        cache: Arc<dyn SnapshotCache>,
        store_timeout: Duration,
        cache_timeout: Duration,
    ) -> Self {
        Self {
            store,
            cache,
            store_timeout,
            cache_timeout,
        }
    }

    /// Run both probes and fold the results. Healthy only if both
    /// succeed within their timeouts.
    pub async fn check(&self) -> HealthReport {
        let database = match tokio::time::timeout(self.store_timeout, self.store.ping()).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(format!("database: {e}")),
            Err(_) => Err(format!(
                "database: probe timed out after {:?}",
                self.store_timeout
            )),
        };

        let cache = match tokio::time::timeout(self.cache_timeout, self.cache.ping()).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(format!("cache: {e}")),
            Err(_) => Err(format!(
                "cache: probe timed out after {:?}",
                self.cache_timeout
            )),
        };

        let errors: Vec<String> = [database.as_ref().err(), cache.as_ref().err()]
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        if !errors.is_empty() {
            tracing::warn!(error = %errors.join("; "), "health probe failed");
        }

        HealthReport {
            status: if errors.is_empty() {
                HealthStatus::Healthy
            } else {
                HealthStatus::Unhealthy
            },
            database: database.is_ok(),
            cache: cache.is_ok(),
            error: if errors.is_empty() {
                None
            } else {
                Some(errors.join("; "))
            },
        }
    }
}
