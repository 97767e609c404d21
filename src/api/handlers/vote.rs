//! Handlers for the vote endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use tracing::error;

use crate::api::dto::restaurant::RestaurantResponse;
use crate::api::dto::vote::VoteRequest;
use crate::domain::vote::VoteChoice;
use crate::error::AppError;
use crate::state::AppState;

/// Applies a vote transition to a restaurant.
///
/// # Endpoint
///
/// `POST /api/restaurants/{id}/vote`
///
/// # Request Body
///
/// ```json
/// { "action": "upvote", "previousAction": "downvote" }
/// ```
///
/// `previousAction` is the client's remembered prior vote (null for a fresh
/// vote). Repeating the same vote is a no-op that echoes the current row.
///
/// # Response
///
/// The updated restaurant with its comments embedded.
///
/// # Errors
///
/// Returns 404 if the id is unknown, 400 on a missing or invalid action.
pub async fn vote_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let Json(payload) = payload?;

    apply_vote(
        &state,
        id,
        payload.action.into(),
        payload.previous_action.map(Into::into),
    )
    .await
}

/// Records a fresh upvote.
///
/// # Endpoint
///
/// `POST /api/restaurants/{id}/upvote` (legacy, body-less)
pub async fn upvote_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<RestaurantResponse>, AppError> {
    apply_vote(&state, id, VoteChoice::Up, None).await
}

/// Records a fresh downvote.
///
/// # Endpoint
///
/// `POST /api/restaurants/{id}/downvote` (legacy, body-less)
pub async fn downvote_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<RestaurantResponse>, AppError> {
    apply_vote(&state, id, VoteChoice::Down, None).await
}

/// Shared vote path: run the transition, drop the cached ranking, and
/// return the updated row with its comments.
async fn apply_vote(
    state: &AppState,
    id: i64,
    choice: VoteChoice,
    previous: Option<VoteChoice>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let restaurant = state.restaurant_service.vote(id, choice, previous).await?;

    if let Err(e) = state.cache.invalidate().await {
        error!("Failed to invalidate ranking cache: {}", e);
    }

    let comments = state.comment_service.list_comments(id).await?;

    Ok(Json(RestaurantResponse::from_parts(restaurant, comments)))
}
