//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info};

const RANKING_KEY: &str = "ranking:v1";

/// Redis cache implementation for the ranking view.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. All operations are fail-open: errors are logged but don't
/// propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: usize,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and
    /// configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_ranking`]
    ///   is called with `ttl_seconds = None`; controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds as usize,
        })
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_ranking(&self) -> CacheResult<Option<String>> {
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(RANKING_KEY).await {
            Ok(Some(json)) => {
                debug!("Cache HIT: ranking");
                Ok(Some(json))
            }
            Ok(None) => {
                debug!("Cache MISS: ranking");
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for ranking: {}", e);
                Ok(None)
            }
        }
    }

    async fn set_ranking(
        &self,
        ranking_json: &str,
        ttl_seconds: Option<usize>,
    ) -> CacheResult<()> {
        let mut conn = self.client.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        match conn
            .set_ex::<_, _, ()>(RANKING_KEY, ranking_json, ttl as u64)
            .await
        {
            Ok(_) => {
                debug!("Cached ranking for {}s", ttl);
                Ok(())
            }
            Err(e) => {
                error!("Redis SET error for ranking: {}", e);
                Ok(())
            }
        }
    }

    async fn invalidate(&self) -> CacheResult<()> {
        let mut conn = self.client.clone();

        match conn.del::<_, ()>(RANKING_KEY).await {
            Ok(_) => {
                debug!("Invalidated ranking cache");
                Ok(())
            }
            Err(e) => {
                error!("Redis DEL error for ranking: {}", e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
