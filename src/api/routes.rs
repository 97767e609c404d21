//! API route configuration.

use crate::api::handlers::{
    add_comment_handler, downvote_handler, list_restaurants_handler, submit_request_handler,
    upvote_handler, vote_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /restaurants`                 - Ranking view (score-ordered catalog)
/// - `POST /restaurants/{id}/vote`       - Apply a vote transition
/// - `POST /restaurants/{id}/upvote`     - Fresh upvote (legacy)
/// - `POST /restaurants/{id}/downvote`   - Fresh downvote (legacy)
/// - `POST /restaurants/{id}/comments`   - Append a comment
/// - `POST /request`                     - Request a new restaurant
///
/// Reads and writes carry separate per-IP rate limits.
pub fn api_routes() -> Router<AppState> {
    let read_routes = Router::new()
        .route("/restaurants", get(list_restaurants_handler))
        .layer(rate_limit::layer());

    let write_routes = Router::new()
        .route("/restaurants/{id}/vote", post(vote_handler))
        .route("/restaurants/{id}/upvote", post(upvote_handler))
        .route("/restaurants/{id}/downvote", post(downvote_handler))
        .route("/restaurants/{id}/comments", post(add_comment_handler))
        .route("/request", post(submit_request_handler))
        .layer(rate_limit::write_layer());

    read_routes.merge(write_routes)
}
