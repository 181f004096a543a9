//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching serialized analysis results.
///
/// Implementations report failures through [`CacheError`]; deciding whether a
/// failure is fatal is left to the caller. The analysis flow treats every
/// error as a cache miss (fail-open), while explicit operator actions such
/// as [`CacheService::clear`] surface it.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the raw value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::OperationError`] if the backend fails.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key` with an optional TTL.
    ///
    /// # Arguments
    ///
    /// - `key` - Cache key (without the backend's namespace prefix)
    /// - `value` - Serialized payload
    /// - `ttl_seconds` - TTL in seconds (implementation-specific default if None)
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Removes a single entry.
    async fn invalidate(&self, key: &str) -> CacheResult<()>;

    /// Removes every entry owned by this service and returns how many were deleted.
    async fn clear(&self) -> CacheResult<u64>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;
}
