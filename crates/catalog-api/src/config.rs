//! # API Configuration
//!
//! Environment-based configuration for the catalog service, with
//! file-or-env secret resolution for database credentials.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use catalog_persistence::{CacheConfig, StoreConfig};

/// Health probe timeouts, independently configurable per dependency.
#[derive(Debug, Clone, Copy)]
pub struct ProbeTimeouts {
    pub store: Duration,
    pub cache: Duration,
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub server_addr: SocketAddr,

    /// Version tag carried in every response payload
    pub version: String,

    /// PostgreSQL configuration
    pub store: StoreConfig,

    /// Redis configuration
    pub cache: CacheConfig,

    /// Health probe timeouts
    pub probes: ProbeTimeouts,

    /// Logging level
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Credentials (`DB_NAME`, `DB_USER`, `DB_PASSWORD`) resolve
    /// file-first: a `<VAR>_FILE` variable naming an existing file wins
    /// over the plain variable, which wins over the documented default.
    pub fn from_env() -> Self {
        let store_defaults = StoreConfig::default();
        let cache_defaults = CacheConfig::default();

        Self {
            server_addr: env::var("SERVER_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
                .parse()
                .expect("Invalid SERVER_ADDR"),

            version: env::var("APP_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),

            store: StoreConfig {
                host: env_or("DB_HOST", &store_defaults.host),
                dbname: resolve_secret("DB_NAME", &store_defaults.dbname),
                user: resolve_secret("DB_USER", &store_defaults.user),
                password: resolve_secret("DB_PASSWORD", &store_defaults.password),
                connect_timeout: Duration::from_secs(env_parse("DB_CONNECT_TIMEOUT", 3)),
                max_connections: env_parse("DB_MAX_CONNECTIONS", store_defaults.max_connections),
            },

            cache: CacheConfig {
                host: env_or("REDIS_HOST", &cache_defaults.host),
                port: env_parse("REDIS_PORT", cache_defaults.port),
                connect_timeout: Duration::from_secs(env_parse("REDIS_CONNECT_TIMEOUT", 3)),
                snapshot_ttl: Duration::from_secs(env_parse("CACHE_TTL_SECS", 120)),
            },

            probes: ProbeTimeouts {
                store: Duration::from_secs(env_parse("HEALTH_DB_TIMEOUT_SECS", 3)),
                cache: Duration::from_secs(env_parse("HEALTH_REDIS_TIMEOUT_SECS", 3)),
            },

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(var: &str, default: T) -> T {
    env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Resolve a secret value: `<VAR>_FILE` pointing at an existing file
/// wins, else the plain variable, else the default.
pub fn resolve_secret(var: &str, default: &str) -> String {
    resolve_secret_with(var, default, |name| env::var(name).ok())
}

fn resolve_secret_with(
    var: &str,
    default: &str,
    get: impl Fn(&str) -> Option<String>,
) -> String {
    if let Some(path) = get(&format!("{var}_FILE")) {
        if Path::new(&path).exists() {
            if let Ok(contents) = fs::read_to_string(&path) {
                return contents.trim().to_string();
            }
        }
    }
    get(var).unwrap_or_else(|| default.to_string())
}
