//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache and notifier setup, and the Axum
//! server lifecycle.

use crate::application::services::{CommentService, RequestService, RestaurantService};
use crate::config::Config;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::notify::{LogNotifier, RequestNotifier, WebhookNotifier};
use crate::infrastructure::persistence::{PgCommentRepository, PgRestaurantRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis cache (or NullCache fallback)
/// - Request notifier (webhook or log-only)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Ranking cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Ranking cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let notifier: Arc<dyn RequestNotifier> =
        if let Some(webhook_url) = config.request_webhook_url.clone() {
            Arc::new(WebhookNotifier::new(webhook_url)?)
        } else {
            Arc::new(LogNotifier::new())
        };

    let pool = Arc::new(pool);
    let restaurant_repository = Arc::new(PgRestaurantRepository::new(pool.clone()));
    let comment_repository = Arc::new(PgCommentRepository::new(pool.clone()));

    let restaurant_service = Arc::new(RestaurantService::new(
        restaurant_repository,
        comment_repository.clone(),
    ));
    let comment_service = Arc::new(CommentService::new(comment_repository));
    let request_service = Arc::new(RequestService::new(notifier));

    let state = AppState::new(restaurant_service, comment_service, request_service, cache);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C, letting in-flight requests
/// finish before the server exits.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
    }
}
