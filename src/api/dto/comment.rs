//! DTOs for the comment endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /api/restaurants/{id}/comments`.
///
/// Whitespace-only text passes the length check here and is rejected by the
/// service after trimming.
#[derive(Debug, Deserialize, Validate)]
pub struct CommentRequest {
    /// Comment body (required, non-empty after trimming).
    #[validate(length(min = 1, max = 2000, message = "Comment text is required"))]
    pub text: String,

    /// Display name; defaults to "Anonymous" when absent or blank.
    #[validate(length(max = 100))]
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_fails_validation() {
        let req = CommentRequest {
            text: String::new(),
            author: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_valid_comment_passes() {
        let req = CommentRequest {
            text: "Get the sliders".to_string(),
            author: Some("Sam".to_string()),
        };
        assert!(req.validate().is_ok());
    }
}
