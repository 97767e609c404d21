//! Handler for the comment endpoint.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use tracing::error;
use validator::Validate;

use crate::api::dto::comment::CommentRequest;
use crate::api::dto::restaurant::CommentResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Appends a comment to a restaurant.
///
/// # Endpoint
///
/// `POST /api/restaurants/{id}/comments`
///
/// # Request Body
///
/// ```json
/// { "text": "Best tenders in town", "author": "Sam" }
/// ```
///
/// The text is trimmed server-side; `author` defaults to "Anonymous".
///
/// # Response
///
/// The created comment.
///
/// # Errors
///
/// Returns 400 if the text is empty after trimming, 404 if the id is
/// unknown.
pub async fn add_comment_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> Result<Json<CommentResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let comment = state
        .comment_service
        .add_comment(id, &payload.text, payload.author.as_deref())
        .await?;

    // The ranking view embeds comments, so a new one invalidates it too.
    if let Err(e) = state.cache.invalidate().await {
        error!("Failed to invalidate ranking cache: {}", e);
    }

    Ok(Json(comment.into()))
}
