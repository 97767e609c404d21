//! Webhook-backed notifier implementation.

use super::service::{NotifyError, NotifyResult, RequestNotifier};
use crate::domain::entities::RestaurantRequest;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

/// Notifier that POSTs restaurant requests to a configured webhook URL.
///
/// The payload is a flat JSON object (`name`, `location`, `link`, `text`),
/// compatible with generic incoming-webhook endpoints.
pub struct WebhookNotifier {
    client: Client,
    webhook_url: String,
}

impl WebhookNotifier {
    /// Creates a webhook notifier for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::DeliveryError`] if the HTTP client cannot be
    /// constructed.
    pub fn new(webhook_url: String) -> NotifyResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                NotifyError::DeliveryError(format!("Failed to build HTTP client: {}", e))
            })?;

        info!("Request notifications enabled (webhook)");

        Ok(Self {
            client,
            webhook_url,
        })
    }
}

#[async_trait]
impl RequestNotifier for WebhookNotifier {
    async fn notify(&self, request: &RestaurantRequest) -> NotifyResult<()> {
        let link = request.link.as_deref().unwrap_or("N/A");
        let payload = json!({
            "name": request.name,
            "location": request.location,
            "link": request.link,
            "text": format!(
                "New restaurant request: {} ({}) - {}",
                request.name, request.location, link
            ),
        });

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::DeliveryError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifyError::RejectedError(format!(
                "webhook answered {}",
                response.status()
            )));
        }

        debug!(name = %request.name, "restaurant request delivered");
        Ok(())
    }
}
