//! DTOs for the add-a-restaurant request endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/request`.
#[derive(Debug, Deserialize, Validate)]
pub struct RestaurantRequestBody {
    /// Restaurant name (required).
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    /// Where the restaurant is (required).
    #[validate(length(min = 1, max = 200, message = "Location is required"))]
    pub location: String,

    /// Optional website or social link.
    #[validate(url(message = "Invalid URL format"))]
    pub link: Option<String>,
}

/// Acknowledgement returned once the request has been accepted.
#[derive(Debug, Serialize)]
pub struct RequestAck {
    pub message: String,
}
