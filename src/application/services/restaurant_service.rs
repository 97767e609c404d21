//! Catalog ranking and vote orchestration service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Comment, Restaurant};
use crate::domain::repositories::{CommentRepository, RestaurantRepository};
use crate::domain::vote::{self, VoteChoice};
use crate::error::AppError;
use serde_json::json;

/// A catalog entry paired with its comments, as served by the ranking view.
#[derive(Debug, Clone)]
pub struct RankedRestaurant {
    pub restaurant: Restaurant,
    pub comments: Vec<Comment>,
}

/// Service for the ranking read model and vote transitions.
///
/// Votes go through the pure transition function in [`crate::domain::vote`];
/// the resulting delta is applied by the repository as a single atomic
/// increment, so this service never does a read-modify-write on counters.
pub struct RestaurantService {
    restaurants: Arc<dyn RestaurantRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl RestaurantService {
    /// Creates a new restaurant service.
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            restaurants,
            comments,
        }
    }

    /// Returns the whole catalog ordered by descending score, each entry
    /// carrying its comments in append order.
    ///
    /// Ties keep insertion order. Pure read, no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_ranked(&self) -> Result<Vec<RankedRestaurant>, AppError> {
        let restaurants = self.restaurants.list_by_score().await?;
        let comments = self.comments.list_all().await?;

        let mut by_restaurant: HashMap<i64, Vec<Comment>> = HashMap::new();
        for comment in comments {
            by_restaurant
                .entry(comment.restaurant_id)
                .or_default()
                .push(comment);
        }

        Ok(restaurants
            .into_iter()
            .map(|restaurant| RankedRestaurant {
                comments: by_restaurant.remove(&restaurant.id).unwrap_or_default(),
                restaurant,
            })
            .collect())
    }

    /// Retrieves a single restaurant by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get(&self, id: i64) -> Result<Restaurant, AppError> {
        self.restaurants
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Restaurant not found", json!({ "id": id })))
    }

    /// Applies a vote transition to a restaurant.
    ///
    /// Computes the counter delta from `(previous, choice)` and hands it to
    /// the repository as one atomic increment. A no-op transition (same vote
    /// repeated) skips the write and echoes the current row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn vote(
        &self,
        id: i64,
        choice: VoteChoice,
        previous: Option<VoteChoice>,
    ) -> Result<Restaurant, AppError> {
        let delta = vote::transition(previous, choice);

        if delta.is_noop() {
            return self.get(id).await;
        }

        let updated = self
            .restaurants
            .apply_vote(id, delta)
            .await?
            .ok_or_else(|| AppError::not_found("Restaurant not found", json!({ "id": id })))?;

        tracing::debug!(
            id = updated.id,
            score = updated.score,
            upvotes = updated.upvotes,
            downvotes = updated.downvotes,
            "vote applied"
        );

        Ok(updated)
    }

    /// Counts catalog entries. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.restaurants.count().await
    }
}
