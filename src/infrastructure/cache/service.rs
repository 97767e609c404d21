//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching the serialized ranking view.
///
/// Implementations must be thread-safe and fail open: cache errors degrade
/// to repository reads and never disrupt a request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the cached ranking view JSON.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(json))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    async fn get_ranking(&self) -> CacheResult<Option<String>>;

    /// Stores the serialized ranking view with optional TTL.
    ///
    /// Implementations should log errors and return `Ok(())` to avoid
    /// disrupting the request flow.
    async fn set_ranking(&self, ranking_json: &str, ttl_seconds: Option<usize>) -> CacheResult<()>;

    /// Drops the cached ranking view.
    ///
    /// Called after every vote or comment mutation.
    async fn invalidate(&self) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health check endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
