//! Best-Effort Notification Dispatch
//!
//! Internal notifications (new donation, new inquiry) are advisory.
//! Dispatch happens on a spawned task after the triggering request has
//! committed, and failures are logged rather than surfaced: a broken
//! notification channel must never fail the request that produced it.

use std::sync::Arc;

use thiserror::Error;

/// A notification destined for site operators
#[derive(Debug, Clone)]
pub struct Notification {
    /// Short routing topic (e.g. "donation.recorded", "contact.submitted")
    pub topic: String,
    /// Human-readable one-line summary
    pub summary: String,
}

impl Notification {
    pub fn new(topic: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            summary: summary.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Trait for notification channels
#[trait_variant::make(Notifier: Send)]
pub trait LocalNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError>;
}

/// Notifier that writes to the application log
///
/// The default channel; an email or chat-webhook notifier can replace
/// it behind the same trait.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        tracing::info!(
            topic = %notification.topic,
            summary = %notification.summary,
            "Notification"
        );
        Ok(())
    }
}

/// Dispatch a notification on a background task
///
/// Returns immediately; delivery errors are logged at warn level.
pub fn dispatch<N>(notifier: Arc<N>, notification: Notification)
where
    N: Notifier + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let topic = notification.topic.clone();
        if let Err(e) = notifier.notify(notification).await {
            tracing::warn!(topic = %topic, error = %e, "Notification delivery failed");
        }
    });
}
