//! Handler for the add-a-restaurant request endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::request::{RequestAck, RestaurantRequestBody};
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a request to add a new restaurant and forwards it to the
/// configured notification channel.
///
/// # Endpoint
///
/// `POST /api/request`
///
/// # Request Body
///
/// ```json
/// { "name": "Howdy Hot Chicken", "location": "Houston, TX", "link": "https://..." }
/// ```
///
/// # Errors
///
/// Returns 400 when name or location is missing, 500 when delivery to the
/// notification channel fails. Delivery failures never affect catalog
/// state.
pub async fn submit_request_handler(
    State(state): State<AppState>,
    payload: Result<Json<RestaurantRequestBody>, JsonRejection>,
) -> Result<Json<RequestAck>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    state
        .request_service
        .submit(&payload.name, &payload.location, payload.link.as_deref())
        .await?;

    Ok(Json(RequestAck {
        message: "Request received".to_string(),
    }))
}
