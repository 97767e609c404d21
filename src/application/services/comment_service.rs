//! Comment append service.

use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;
use serde_json::json;

/// Author recorded when the client does not supply one.
const DEFAULT_AUTHOR: &str = "Anonymous";

/// Service for appending comments to restaurants.
///
/// Trims the text server-side and rejects comments that are empty after
/// trimming. The creation timestamp is set by the storage layer.
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }

    /// Appends a comment to a restaurant.
    ///
    /// `author` falls back to `"Anonymous"` when absent or blank.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `text` is empty after trimming.
    /// Returns [`AppError::NotFound`] if the restaurant id is unknown.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn add_comment(
        &self,
        restaurant_id: i64,
        text: &str,
        author: Option<&str>,
    ) -> Result<Comment, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::bad_request(
                "Comment text is required",
                json!({ "field": "text" }),
            ));
        }

        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_AUTHOR);

        let new_comment = NewComment {
            restaurant_id,
            author: author.to_string(),
            text: text.to_string(),
        };

        self.comments.append(new_comment).await?.ok_or_else(|| {
            AppError::not_found("Restaurant not found", json!({ "id": restaurant_id }))
        })
    }

    /// Lists a restaurant's comments in append order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_comments(&self, restaurant_id: i64) -> Result<Vec<Comment>, AppError> {
        self.comments.list_for_restaurant(restaurant_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCommentRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_add_comment_trims_text() {
        let mut comments = MockCommentRepository::new();

        comments
            .expect_append()
            .withf(|new| new.text == "Great spot" && new.author == "Anonymous")
            .times(1)
            .returning(|new| {
                Ok(Some(Comment::new(
                    1,
                    new.restaurant_id,
                    new.author,
                    new.text,
                    Utc::now(),
                )))
            });

        let service = CommentService::new(Arc::new(comments));
        let comment = service.add_comment(1, "  Great spot  ", None).await.unwrap();

        assert_eq!(comment.text, "Great spot");
        assert_eq!(comment.author, "Anonymous");
    }

    #[tokio::test]
    async fn test_add_comment_rejects_whitespace_only_text() {
        let mut comments = MockCommentRepository::new();
        comments.expect_append().times(0);

        let service = CommentService::new(Arc::new(comments));
        let result = service.add_comment(1, "   \t  ", Some("Sam")).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_add_comment_blank_author_falls_back_to_anonymous() {
        let mut comments = MockCommentRepository::new();

        comments
            .expect_append()
            .withf(|new| new.author == "Anonymous")
            .times(1)
            .returning(|new| {
                Ok(Some(Comment::new(
                    5,
                    new.restaurant_id,
                    new.author,
                    new.text,
                    Utc::now(),
                )))
            });

        let service = CommentService::new(Arc::new(comments));
        let comment = service.add_comment(1, "Solid", Some("  ")).await.unwrap();

        assert_eq!(comment.author, "Anonymous");
    }

    #[tokio::test]
    async fn test_add_comment_unknown_restaurant_is_not_found() {
        let mut comments = MockCommentRepository::new();
        comments.expect_append().times(1).returning(|_| Ok(None));

        let service = CommentService::new(Arc::new(comments));
        let result = service.add_comment(999, "Hello", None).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
