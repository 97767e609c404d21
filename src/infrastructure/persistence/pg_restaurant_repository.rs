//! PostgreSQL implementation of the restaurant repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRestaurant, Restaurant};
use crate::domain::repositories::RestaurantRepository;
use crate::domain::vote::VoteDelta;
use crate::error::AppError;

const RESTAURANT_COLUMNS: &str =
    "id, name, description, website, image_url, upvotes, downvotes, score, created_at, updated_at";

/// Database row for a catalog entry.
#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    description: String,
    website: String,
    image_url: String,
    upvotes: i64,
    downvotes: i64,
    score: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Restaurant::new(
            row.id,
            row.name,
            row.description,
            row.website,
            row.image_url,
            row.upvotes,
            row.downvotes,
            row.score,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL repository for the restaurant catalog.
///
/// Vote deltas are applied with a single `UPDATE ... SET c = c + delta`
/// statement, so concurrent votes on the same row serialize in the database
/// and no increment is lost.
pub struct PgRestaurantRepository {
    pool: Arc<PgPool>,
}

impl PgRestaurantRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    async fn insert(&self, new_restaurant: NewRestaurant) -> Result<Restaurant, AppError> {
        let sql = format!(
            "INSERT INTO restaurants (name, description, website, image_url) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {RESTAURANT_COLUMNS}"
        );

        let row: RestaurantRow = sqlx::query_as(&sql)
            .bind(&new_restaurant.name)
            .bind(&new_restaurant.description)
            .bind(&new_restaurant.website)
            .bind(&new_restaurant.image_url)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        let sql = format!("SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE id = $1");

        let row: Option<RestaurantRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list_by_score(&self) -> Result<Vec<Restaurant>, AppError> {
        // Ties keep insertion order: ids are assigned sequentially.
        let sql = format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants ORDER BY score DESC, id ASC"
        );

        let rows: Vec<RestaurantRow> = sqlx::query_as(&sql).fetch_all(self.pool.as_ref()).await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn apply_vote(&self, id: i64, delta: VoteDelta) -> Result<Option<Restaurant>, AppError> {
        let sql = format!(
            "UPDATE restaurants \
             SET upvotes = upvotes + $2, \
                 downvotes = downvotes + $3, \
                 score = score + $4, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {RESTAURANT_COLUMNS}"
        );

        let row: Option<RestaurantRow> = sqlx::query_as(&sql)
            .bind(id)
            .bind(delta.upvotes)
            .bind(delta.downvotes)
            .bind(delta.score)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM restaurants")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
