//! Repository trait for the append-only comment list.

use crate::domain::entities::{Comment, NewComment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for restaurant comments.
///
/// Comments are append-only; there is no update or delete operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryCatalog`] - in-memory test harness
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Appends a comment, setting the creation timestamp server-side.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Comment))` with the stored comment
    /// - `Ok(None)` when the referenced restaurant does not exist
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn append(&self, new_comment: NewComment) -> Result<Option<Comment>, AppError>;

    /// Lists a restaurant's comments in append order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_for_restaurant(&self, restaurant_id: i64) -> Result<Vec<Comment>, AppError>;

    /// Lists every comment in the catalog in append order.
    ///
    /// Used to assemble the ranking view without a query per restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_all(&self) -> Result<Vec<Comment>, AppError>;
}
