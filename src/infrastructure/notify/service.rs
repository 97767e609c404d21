//! Notifier service trait and error types.

use crate::domain::entities::RestaurantRequest;
use async_trait::async_trait;

/// Errors that can occur while delivering a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification delivery error: {0}")]
    DeliveryError(String),

    #[error("Notification rejected: {0}")]
    RejectedError(String),
}

/// Result type for notifier operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Trait for forwarding restaurant requests to an external channel.
///
/// Delivery is best-effort: a failure is reported to the caller but never
/// touches catalog state.
///
/// # Implementations
///
/// - [`crate::infrastructure::notify::WebhookNotifier`] - POSTs JSON to a configured webhook
/// - [`crate::infrastructure::notify::LogNotifier`] - logs and acknowledges when no channel is configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestNotifier: Send + Sync {
    /// Delivers a restaurant request to the notification channel.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::DeliveryError`] on transport failures and
    /// [`NotifyError::RejectedError`] when the channel answers with a
    /// non-success status.
    async fn notify(&self, request: &RestaurantRequest) -> NotifyResult<()>;
}
