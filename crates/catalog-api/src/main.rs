//! # Catalog API Server
//!
//! Binary entry point for the catalog read service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::{AppState, Config, build_router, version};
use catalog_persistence::{
    CatalogCoordinator, HealthAggregator, PgProductStore, RedisSnapshotCache,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env();
    version::init(config.version.clone());

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!(version = version::tag(), "Starting Catalog API");

    // Connect PostgreSQL
    tracing::info!(
        host = %config.store.host,
        dbname = %config.store.dbname,
        "Connecting to PostgreSQL"
    );
    let store = PgProductStore::connect(&config.store).await?;
    store.ensure_schema().await?;
    tracing::info!("PostgreSQL connected");

    // Connect Redis
    tracing::info!(url = %config.cache.url(), "Connecting to Redis");
    let cache = RedisSnapshotCache::connect(&config.cache).await?;
    tracing::info!("Redis connected");

    let store = Arc::new(store);
    let cache = Arc::new(cache);

    let state = AppState {
        catalog: Arc::new(CatalogCoordinator::with_ttl(
            store.clone(),
            cache.clone(),
            config.cache.snapshot_ttl,
        )),
        health: Arc::new(HealthAggregator::new(
            store,
            cache,
            config.probes.store,
            config.probes.cache,
        )),
    };

    let app = build_router(state);

    // Start server
    let addr = config.server_addr;
    tracing::info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
