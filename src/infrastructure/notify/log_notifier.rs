//! Log-only notifier for deployments without a configured channel.

use super::service::{NotifyResult, RequestNotifier};
use crate::domain::entities::RestaurantRequest;
use async_trait::async_trait;
use tracing::info;

/// A notifier that records requests in the service log and acknowledges.
///
/// Used when no webhook URL is configured, so the request endpoint keeps
/// working in development and minimal deployments.
pub struct LogNotifier;

impl LogNotifier {
    /// Creates a new LogNotifier instance.
    pub fn new() -> Self {
        info!("Request notifications disabled (log only)");
        Self
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestNotifier for LogNotifier {
    async fn notify(&self, request: &RestaurantRequest) -> NotifyResult<()> {
        info!(
            name = %request.name,
            location = %request.location,
            link = request.link.as_deref().unwrap_or("N/A"),
            "restaurant request received (no notification channel configured)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_notifier_always_acknowledges() {
        let notifier = LogNotifier::new();
        let request = RestaurantRequest::new("Spot".to_string(), "Houston".to_string(), None);

        assert!(notifier.notify(&request).await.is_ok());
    }
}
