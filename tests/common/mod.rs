#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;

use chicken_ranker::application::services::{CommentService, RequestService, RestaurantService};
use chicken_ranker::domain::entities::{NewComment, NewRestaurant, Restaurant};
use chicken_ranker::domain::repositories::{CommentRepository, RestaurantRepository};
use chicken_ranker::infrastructure::cache::NullCache;
use chicken_ranker::infrastructure::notify::{
    LogNotifier, NotifyError, NotifyResult, RequestNotifier,
};
use chicken_ranker::infrastructure::persistence::InMemoryCatalog;
use chicken_ranker::state::AppState;

/// A notifier that always fails, for exercising the delivery-error path.
pub struct FailingNotifier;

#[async_trait]
impl RequestNotifier for FailingNotifier {
    async fn notify(
        &self,
        _request: &chicken_ranker::domain::entities::RestaurantRequest,
    ) -> NotifyResult<()> {
        Err(NotifyError::DeliveryError("webhook unreachable".to_string()))
    }
}

/// Builds an app state over a fresh in-memory catalog.
///
/// Returns the catalog handle alongside the state so tests can seed and
/// inspect storage directly.
pub fn create_test_state() -> (AppState, Arc<InMemoryCatalog>) {
    create_test_state_with_notifier(Arc::new(LogNotifier::new()))
}

/// Same as [`create_test_state`], with a custom request notifier.
pub fn create_test_state_with_notifier(
    notifier: Arc<dyn RequestNotifier>,
) -> (AppState, Arc<InMemoryCatalog>) {
    let catalog = Arc::new(InMemoryCatalog::new());

    let restaurant_repo: Arc<dyn RestaurantRepository> = catalog.clone();
    let comment_repo: Arc<dyn CommentRepository> = catalog.clone();

    let restaurant_service = Arc::new(RestaurantService::new(
        restaurant_repo,
        comment_repo.clone(),
    ));
    let comment_service = Arc::new(CommentService::new(comment_repo));
    let request_service = Arc::new(RequestService::new(notifier));

    let state = AppState::new(
        restaurant_service,
        comment_service,
        request_service,
        Arc::new(NullCache::new()),
    );

    (state, catalog)
}

pub async fn seed_restaurant(catalog: &InMemoryCatalog, name: &str) -> Restaurant {
    catalog
        .insert(NewRestaurant {
            name: name.to_string(),
            description: format!("{} serves Nashville-style hot chicken", name),
            website: String::new(),
            image_url: String::new(),
        })
        .await
        .unwrap()
}

pub async fn seed_comment(catalog: &InMemoryCatalog, restaurant_id: i64, text: &str) {
    catalog
        .append(NewComment {
            restaurant_id,
            author: "Anonymous".to_string(),
            text: text.to_string(),
        })
        .await
        .unwrap()
        .expect("restaurant must exist when seeding comments");
}
