//! PostgreSQL implementation of the comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;
use crate::utils::db_error::is_restaurant_fk_violation;

const COMMENT_COLUMNS: &str = "id, restaurant_id, author, text, created_at";

/// Database row for a comment.
#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    restaurant_id: i64,
    author: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment::new(
            row.id,
            row.restaurant_id,
            row.author,
            row.text,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for the append-only comment list.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn append(&self, new_comment: NewComment) -> Result<Option<Comment>, AppError> {
        let sql = format!(
            "INSERT INTO comments (restaurant_id, author, text) \
             VALUES ($1, $2, $3) \
             RETURNING {COMMENT_COLUMNS}"
        );

        let result: Result<CommentRow, sqlx::Error> = sqlx::query_as(&sql)
            .bind(new_comment.restaurant_id)
            .bind(&new_comment.author)
            .bind(&new_comment.text)
            .fetch_one(self.pool.as_ref())
            .await;

        match result {
            Ok(row) => Ok(Some(row.into())),
            // Unknown restaurant id shows up as an FK violation.
            Err(e) if is_restaurant_fk_violation(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_for_restaurant(&self, restaurant_id: i64) -> Result<Vec<Comment>, AppError> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE restaurant_id = $1 ORDER BY id ASC"
        );

        let rows: Vec<CommentRow> = sqlx::query_as(&sql)
            .bind(restaurant_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> Result<Vec<Comment>, AppError> {
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments ORDER BY id ASC");

        let rows: Vec<CommentRow> = sqlx::query_as(&sql).fetch_all(self.pool.as_ref()).await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
