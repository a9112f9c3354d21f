//! PostgreSQL repository implementation.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::error::StoreError;
use crate::repository::traits::ProductStore;
use catalog_domain::Product;

// =============================================================================
// STORE CONFIGURATION
// =============================================================================

/// PostgreSQL connection configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub connect_timeout: Duration,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "db".to_string(),
            dbname: "ecommerce".to_string(),
            user: "ecomuser".to_string(),
            password: "securepassword123".to_string(),
            connect_timeout: Duration::from_secs(3),
            max_connections: 10,
        }
    }
}

// =============================================================================
// POSTGRES PRODUCT STORE
// =============================================================================

/// Pooled PostgreSQL store. Shared across all requests; the pool
/// tolerates concurrent use.
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    /// Connect a new pooled store.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .database(&config.dbname)
            .username(&config.user)
            .password(&config.password);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, shared pools).
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the products table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                price NUMERIC(10, 2) NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Pool reference for advanced operations.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_ordered(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<(i64, String, f64)> =
            sqlx::query_as("SELECT id, name, price::FLOAT8 FROM products ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, price)| Product { id, name, price })
            .collect())
    }

    async fn insert(&self, name: &str, price: f64) -> Result<i64, StoreError> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id")
                .bind(name)
                .bind(price)
                .fetch_one(&self.pool)
                .await?;
        Ok(id)
    }

    async fn update(&self, id: i64, name: &str, price: f64) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE products SET name = $1, price = $2 WHERE id = $3")
            .bind(name)
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let _: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
