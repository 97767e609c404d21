//! Comment entity for the append-only per-restaurant comment list.

use chrono::{DateTime, Utc};

/// A comment left on a restaurant.
///
/// Comments are append-only: there is no edit or delete operation.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub restaurant_id: i64,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a new Comment instance.
    pub fn new(
        id: i64,
        restaurant_id: i64,
        author: String,
        text: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            author,
            text,
            created_at,
        }
    }
}

/// Input data for appending a comment.
///
/// The text must already be trimmed and non-empty; the author defaults to
/// `"Anonymous"` upstream when the client omits it. The timestamp is set by
/// the storage layer at append time.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub restaurant_id: i64,
    pub author: String,
    pub text: String,
}
