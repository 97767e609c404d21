//! Notification channel abstractions.
//!
//! The request-a-restaurant flow forwards submissions to an external channel.
//! Delivery failures surface to the caller but never mutate catalog state.
//!
//! # Implementations
//!
//! - [`WebhookNotifier`] - POSTs JSON to a configured incoming webhook
//! - [`LogNotifier`] - log-only fallback when no channel is configured

pub mod log_notifier;
pub mod service;
pub mod webhook;

pub use log_notifier::LogNotifier;
pub use service::{NotifyError, NotifyResult, RequestNotifier};
pub use webhook::WebhookNotifier;

#[cfg(test)]
pub use service::MockRequestNotifier;
