//! Handler for the ranking view endpoint.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::api::dto::restaurant::RestaurantResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Edge caching directive for the ranking view: cacheable for 60 seconds,
/// stale responses may be served for 30 more while revalidating.
const RANKING_CACHE_CONTROL: &str = "public, s-maxage=60, stale-while-revalidate=30";

/// Returns all restaurants ordered by descending score.
///
/// # Endpoint
///
/// `GET /api/restaurants`
///
/// # Ordering
///
/// Descending score; ties keep insertion order. Each entry embeds its
/// comments in append order.
///
/// # Cache Strategy
///
/// The serialized response is cached under a single key:
///
/// - **Cache hit**: cached JSON is returned as-is
/// - **Cache miss**: the catalog is read and the cache repopulated
///   fire-and-forget
/// - **Cache error**: logged and treated as a miss
///
/// Votes and comments invalidate the key, so a hit is never staler than the
/// cache TTL.
pub async fn list_restaurants_handler(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if let Ok(Some(cached)) = state.cache.get_ranking().await {
        debug!("serving ranking from cache");
        return Ok(ranking_response(cached));
    }

    let ranked = state.restaurant_service.list_ranked().await?;
    let payload: Vec<RestaurantResponse> = ranked.into_iter().map(Into::into).collect();

    let body = serde_json::to_string(&payload).map_err(|e| {
        AppError::internal(
            "Failed to serialize ranking",
            json!({ "reason": e.to_string() }),
        )
    })?;

    // Repopulate the cache without blocking the response.
    let cache = state.cache.clone();
    let cached_body = body.clone();
    tokio::spawn(async move {
        if let Err(e) = cache.set_ranking(&cached_body, None).await {
            error!("Failed to cache ranking: {}", e);
        }
    });

    Ok(ranking_response(body))
}

fn ranking_response(body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, RANKING_CACHE_CONTROL),
        ],
        body,
    )
        .into_response()
}
