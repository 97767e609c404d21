use std::sync::Arc;

use crate::application::services::{CommentService, RequestService, RestaurantService};
use crate::infrastructure::cache::CacheService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub restaurant_service: Arc<RestaurantService>,
    pub comment_service: Arc<CommentService>,
    pub request_service: Arc<RequestService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Creates the application state from its service components.
    pub fn new(
        restaurant_service: Arc<RestaurantService>,
        comment_service: Arc<CommentService>,
        request_service: Arc<RequestService>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            restaurant_service,
            comment_service,
            request_service,
            cache,
        }
    }
}
