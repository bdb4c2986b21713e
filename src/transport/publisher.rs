//! Publisher trait.

use crate::core::Notification;
use crate::error::Result;
use async_trait::async_trait;

/// What a transport reports back for a delivered notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Transport-assigned message id, when the transport provides one.
    pub message_id: Option<String>,
}

/// Trait for messaging transports.
///
/// Implement this trait to deliver notifications somewhere other than SNS.
/// A publisher is shared across invocations, so it must not carry
/// per-invocation state.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Deliver one notification.
    ///
    /// # Errors
    ///
    /// Returns `NotifierError::Publish` if the transport fails or rejects the message.
    async fn publish(&self, notification: &Notification) -> Result<PublishReceipt>;

    /// Get a human-readable name for this publisher (for logging/debugging).
    fn name(&self) -> String;
}
