//! In-memory fakes of the leaf adapter traits, shared by the
//! coordinator and health aggregator tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::cache::SnapshotCache;
use crate::error::{CacheError, StoreError};
use crate::repository::ProductStore;
use catalog_domain::Product;

// =============================================================================
// FAKE STORE
// =============================================================================

struct FakeStoreState {
    rows: Vec<Product>,
    next_id: i64,
}

/// In-memory durable store. Assigns ids sequentially from one past the
/// highest seeded id, mimicking BIGSERIAL.
pub struct FakeStore {
    state: Mutex<FakeStoreState>,
    failing: AtomicBool,
    ping_delay: Mutex<Option<Duration>>,
}

impl FakeStore {
    pub fn seeded(rows: Vec<Product>) -> Self {
        let next_id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(FakeStoreState { rows, next_id }),
            failing: AtomicBool::new(false),
            ping_delay: Mutex::new(None),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_ping_delay(&self, delay: Duration) {
        *self.ping_delay.lock().unwrap() = Some(delay);
    }

    fn check_failing(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError("store offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProductStore for FakeStore {
    async fn list_ordered(&self) -> Result<Vec<Product>, StoreError> {
        self.check_failing()?;
        let mut rows = self.state.lock().unwrap().rows.clone();
        rows.sort_by_key(|p| p.id);
        Ok(rows)
    }

    async fn insert(&self, name: &str, price: f64) -> Result<i64, StoreError> {
        self.check_failing()?;
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        state.rows.push(Product::new(id, name, price));
        Ok(id)
    }

    async fn update(&self, id: i64, name: &str, price: f64) -> Result<u64, StoreError> {
        self.check_failing()?;
        let mut state = self.state.lock().unwrap();
        match state.rows.iter_mut().find(|p| p.id == id) {
            Some(row) => {
                row.name = name.to_string();
                row.price = price;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        self.check_failing()?;
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|p| p.id != id);
        Ok((before - state.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let delay = *self.ping_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.check_failing()
    }
}

// =============================================================================
// FAKE CACHE
// =============================================================================

/// In-memory snapshot cache with real expiry deadlines, driven by the
/// tokio clock so tests can pause and advance time.
pub struct FakeCache {
    entries: Mutex<HashMap<String, (Vec<Product>, Instant)>>,
    failing: AtomicBool,
    delete_calls: AtomicUsize,
    ping_delay: Mutex<Option<Duration>>,
}

impl FakeCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            failing: AtomicBool::new(false),
            delete_calls: AtomicUsize::new(0),
            ping_delay: Mutex::new(None),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn set_ping_delay(&self, delay: Duration) {
        *self.ping_delay.lock().unwrap() = Some(delay);
    }

    fn check_failing(&self) -> Result<(), CacheError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(CacheError("cache offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SnapshotCache for FakeCache {
    async fn get_products(&self, key: &str) -> Result<Option<Vec<Product>>, CacheError> {
        self.check_failing()?;
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((items, deadline)) if *deadline > Instant::now() => Ok(Some(items.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
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
        self.check_failing()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (items.to_vec(), Instant::now() + ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let delay = *self.ping_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.check_failing()
    }
}
