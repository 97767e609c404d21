//! Restaurant request intake service.

use std::sync::Arc;

use crate::domain::entities::RestaurantRequest;
use crate::error::AppError;
use crate::infrastructure::notify::RequestNotifier;
use serde_json::json;

/// Service for the add-a-restaurant request flow.
///
/// Validates the submission and forwards it to the configured notification
/// channel. Requests are never persisted; a delivery failure is surfaced to
/// the caller with catalog state unaffected.
pub struct RequestService {
    notifier: Arc<dyn RequestNotifier>,
}

impl RequestService {
    /// Creates a new request service.
    pub fn new(notifier: Arc<dyn RequestNotifier>) -> Self {
        Self { notifier }
    }

    /// Validates and forwards a restaurant request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` or `location` is empty
    /// after trimming.
    /// Returns [`AppError::External`] when the notification channel fails;
    /// the error is logged and no state changes.
    pub async fn submit(
        &self,
        name: &str,
        location: &str,
        link: Option<&str>,
    ) -> Result<RestaurantRequest, AppError> {
        let name = name.trim();
        let location = location.trim();

        if name.is_empty() || location.is_empty() {
            return Err(AppError::bad_request(
                "Name and location are required",
                json!({ "fields": ["name", "location"] }),
            ));
        }

        let request = RestaurantRequest::new(
            name.to_string(),
            location.to_string(),
            link.map(str::trim).filter(|l| !l.is_empty()).map(String::from),
        );

        self.notifier.notify(&request).await.map_err(|e| {
            tracing::error!(error = %e, name = %request.name, "failed to deliver restaurant request");
            AppError::external("Failed to deliver request notification", json!({}))
        })?;

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::notify::{MockRequestNotifier, NotifyError};

    #[tokio::test]
    async fn test_submit_forwards_trimmed_request() {
        let mut notifier = MockRequestNotifier::new();

        notifier
            .expect_notify()
            .withf(|req| req.name == "Howdy Hot Chicken" && req.location == "Houston, TX")
            .times(1)
            .returning(|_| Ok(()));

        let service = RequestService::new(Arc::new(notifier));
        let request = service
            .submit("  Howdy Hot Chicken ", " Houston, TX ", None)
            .await
            .unwrap();

        assert_eq!(request.name, "Howdy Hot Chicken");
        assert!(request.link.is_none());
    }

    #[tokio::test]
    async fn test_submit_rejects_missing_fields() {
        let mut notifier = MockRequestNotifier::new();
        notifier.expect_notify().times(0);

        let service = RequestService::new(Arc::new(notifier));

        assert!(matches!(
            service.submit("", "Houston", None).await,
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            service.submit("Spot", "   ", None).await,
            Err(AppError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_submit_surfaces_delivery_failure_as_external() {
        let mut notifier = MockRequestNotifier::new();

        notifier
            .expect_notify()
            .times(1)
            .returning(|_| Err(NotifyError::DeliveryError("connection refused".to_string())));

        let service = RequestService::new(Arc::new(notifier));
        let result = service.submit("Spot", "Houston", Some("https://spot.example")).await;

        assert!(matches!(result, Err(AppError::External { .. })));
    }

    #[tokio::test]
    async fn test_submit_drops_blank_link() {
        let mut notifier = MockRequestNotifier::new();

        notifier
            .expect_notify()
            .withf(|req| req.link.is_none())
            .times(1)
            .returning(|_| Ok(()));

        let service = RequestService::new(Arc::new(notifier));
        service.submit("Spot", "Houston", Some("  ")).await.unwrap();
    }
}
