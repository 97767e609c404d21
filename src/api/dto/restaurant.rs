//! DTOs for the ranking view.

use crate::application::services::RankedRestaurant;
use crate::domain::entities::{Comment, Restaurant};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A catalog entry as returned by the API.
///
/// Field names match the historical front-end contract (camelCase, comments
/// embedded in the restaurant object).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub website: String,
    pub image_url: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
    pub comments: Vec<CommentResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RestaurantResponse {
    /// Builds the response from an entity and its comments.
    pub fn from_parts(restaurant: Restaurant, comments: Vec<Comment>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            description: restaurant.description,
            website: restaurant.website,
            image_url: restaurant.image_url,
            upvotes: restaurant.upvotes,
            downvotes: restaurant.downvotes,
            score: restaurant.score,
            comments: comments.into_iter().map(CommentResponse::from).collect(),
            created_at: restaurant.created_at,
            updated_at: restaurant.updated_at,
        }
    }
}

impl From<RankedRestaurant> for RestaurantResponse {
    fn from(ranked: RankedRestaurant) -> Self {
        Self::from_parts(ranked.restaurant, ranked.comments)
    }
}

/// A comment as embedded in restaurant responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub restaurant_id: i64,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            restaurant_id: comment.restaurant_id,
            author: comment.author,
            text: comment.text,
            created_at: comment.created_at,
        }
    }
}
