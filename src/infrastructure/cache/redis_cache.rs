//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// Namespace applied to every key written by this service.
const KEY_PREFIX: &str = "sentiment:";

/// Number of keys requested per `SCAN` round trip when clearing.
const SCAN_BATCH: usize = 500;

/// Reconnect attempts made by a single call while Redis is down.
const CONNECT_RETRIES: usize = 1;

/// Redis cache implementation for analysis results.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection reuse.
/// Entries expire through Redis' own TTL handling (`SETEX`).
///
/// The connection is established on first use. While Redis is unreachable,
/// every call fails with [`CacheError::ConnectionError`] and the next call tries
/// again, so the cache starts working once Redis comes back without a restart.
pub struct RedisCache {
    client: Client,
    manager: OnceCell<ConnectionManager>,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Creates a cache for `redis_url` without contacting the server.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set`] is called
    ///   with `ttl_seconds = None`; controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid.
    pub fn new(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        Ok(Self {
            client,
            manager: OnceCell::new(),
            default_ttl: default_ttl_seconds,
            key_prefix: KEY_PREFIX.to_string(),
        })
    }

    /// Creates the cache and checks the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let cache = Self::new(redis_url, default_ttl_seconds)?;

        let mut conn = cache.connection().await?;
        conn.ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        Ok(cache)
    }

    /// Returns the shared connection, establishing it if needed.
    async fn connection(&self) -> CacheResult<ConnectionManager> {
        self.manager
            .get_or_try_init(|| async {
                info!("Connecting to Redis");
                let config = ConnectionManagerConfig::new().set_number_of_retries(CONNECT_RETRIES);
                ConnectionManager::new_with_config(self.client.clone(), config)
                    .await
                    .inspect(|_| info!("✓ Connected to Redis"))
                    .map_err(|e| {
                        warn!(error = %e, "Redis connection failed");
                        CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
                    })
            })
            .await
            .cloned()
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.connection().await?;

        let value = conn
            .get::<_, Option<String>>(&full_key)
            .await
            .map_err(|e| CacheError::OperationError(format!("GET {}: {}", full_key, e)))?;

        match value {
            Some(_) => debug!("Cache HIT: {}", full_key),
            None => debug!("Cache MISS: {}", full_key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.connection().await?;
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        conn.set_ex::<_, _, ()>(&full_key, value, ttl)
            .await
            .map_err(|e| CacheError::OperationError(format!("SETEX {}: {}", full_key, e)))?;

        debug!("Cache SET: {} (TTL: {}s)", full_key, ttl);
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.connection().await?;

        let deleted = conn
            .del::<_, i64>(&full_key)
            .await
            .map_err(|e| CacheError::OperationError(format!("DEL {}: {}", full_key, e)))?;

        if deleted > 0 {
            debug!("Cache INVALIDATE: {}", full_key);
        }
        Ok(())
    }

    async fn clear(&self) -> CacheResult<u64> {
        let pattern = format!("{}*", self.key_prefix);
        let mut conn = self.connection().await?;
        let mut cursor: u64 = 0;
        let mut removed: u64 = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(|e| CacheError::OperationError(format!("SCAN {}: {}", pattern, e)))?;

            if !keys.is_empty() {
                let deleted = conn
                    .del::<_, u64>(&keys)
                    .await
                    .map_err(|e| CacheError::OperationError(format!("DEL batch: {}", e)))?;
                removed += deleted;
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        info!("Cache CLEAR: removed {} entries", removed);
        Ok(removed)
    }

    async fn health_check(&self) -> bool {
        match self.connection().await {
            Ok(mut conn) => conn.ping::<()>().await.is_ok(),
            Err(_) => false,
        }
    }
}
