//! In-memory catalog implementation.
//!
//! Implements both repository traits over a single `RwLock`-guarded state,
//! used by the integration tests as a no-database harness. Vote deltas
//! mutate the counters inside one write-lock critical section, which gives
//! the same lost-update guarantee the SQL increment provides.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::cmp::Reverse;
use tokio::sync::RwLock;

use crate::domain::entities::{Comment, NewComment, NewRestaurant, Restaurant};
use crate::domain::repositories::{CommentRepository, RestaurantRepository};
use crate::domain::vote::VoteDelta;
use crate::error::AppError;

#[derive(Default)]
struct CatalogState {
    restaurants: Vec<Restaurant>,
    comments: Vec<Comment>,
    next_restaurant_id: i64,
    next_comment_id: i64,
}

/// In-memory restaurant catalog.
///
/// Restaurants are kept in insertion order; ids are assigned sequentially,
/// so `ORDER BY score DESC, id ASC` semantics are reproduced with a stable
/// sort by descending score.
#[derive(Default)]
pub struct InMemoryCatalog {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryCatalog {
    async fn insert(&self, new_restaurant: NewRestaurant) -> Result<Restaurant, AppError> {
        let mut state = self.state.write().await;

        if state
            .restaurants
            .iter()
            .any(|r| r.name == new_restaurant.name)
        {
            return Err(AppError::conflict(
                "Restaurant name already exists",
                json!({ "name": new_restaurant.name }),
            ));
        }

        state.next_restaurant_id += 1;
        let now = Utc::now();
        let restaurant = Restaurant::new(
            state.next_restaurant_id,
            new_restaurant.name,
            new_restaurant.description,
            new_restaurant.website,
            new_restaurant.image_url,
            0,
            0,
            0,
            now,
            now,
        );

        state.restaurants.push(restaurant.clone());
        Ok(restaurant)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        let state = self.state.read().await;
        Ok(state.restaurants.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_score(&self) -> Result<Vec<Restaurant>, AppError> {
        let state = self.state.read().await;

        let mut ranked = state.restaurants.clone();
        // Stable sort: equal scores keep insertion order.
        ranked.sort_by_key(|r| Reverse(r.score));

        Ok(ranked)
    }

    async fn apply_vote(&self, id: i64, delta: VoteDelta) -> Result<Option<Restaurant>, AppError> {
        let mut state = self.state.write().await;

        let Some(restaurant) = state.restaurants.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        restaurant.upvotes += delta.upvotes;
        restaurant.downvotes += delta.downvotes;
        restaurant.score += delta.score;
        restaurant.updated_at = Utc::now();

        Ok(Some(restaurant.clone()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let state = self.state.read().await;
        Ok(state.restaurants.len() as i64)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut state = self.state.write().await;
        let removed = state.restaurants.len() as u64;
        state.restaurants.clear();
        state.comments.clear();
        Ok(removed)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCatalog {
    async fn append(&self, new_comment: NewComment) -> Result<Option<Comment>, AppError> {
        let mut state = self.state.write().await;

        if !state
            .restaurants
            .iter()
            .any(|r| r.id == new_comment.restaurant_id)
        {
            return Ok(None);
        }

        state.next_comment_id += 1;
        let comment = Comment::new(
            state.next_comment_id,
            new_comment.restaurant_id,
            new_comment.author,
            new_comment.text,
            Utc::now(),
        );

        state.comments.push(comment.clone());
        Ok(Some(comment))
    }

    async fn list_for_restaurant(&self, restaurant_id: i64) -> Result<Vec<Comment>, AppError> {
        let state = self.state.read().await;
        Ok(state
            .comments
            .iter()
            .filter(|c| c.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Comment>, AppError> {
        let state = self.state.read().await;
        Ok(state.comments.clone())
    }
}
