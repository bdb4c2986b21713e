//! Amazon SNS publisher.

use super::{PublishReceipt, Publisher};
use crate::core::Notification;
use crate::error::{NotifierError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::Client;
use aws_sdk_sns::error::DisplayErrorContext;

/// Publishes notifications through the SNS `Publish` API.
///
/// The client is created once at cold start and reused by every invocation;
/// it holds connection pools and credentials only.
///
/// # Examples
///
/// ```rust,no_run
/// use adoption_notifier::transport::SnsPublisher;
///
/// # async fn example() {
/// // Region and credentials come from the standard AWS provider chain.
/// let publisher = SnsPublisher::from_env(None).await;
///
/// // Point at a local emulator instead.
/// let local = SnsPublisher::from_env(Some("http://localhost:4566")).await;
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SnsPublisher {
    client: Client,
}

impl SnsPublisher {
    /// Wrap an existing SNS client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the shared AWS configuration.
    ///
    /// `endpoint_url` overrides SNS endpoint resolution when set.
    pub async fn from_env(endpoint_url: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(url) = endpoint_url {
            loader = loader.endpoint_url(url);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    async fn publish(&self, notification: &Notification) -> Result<PublishReceipt> {
        let output = self
            .client
            .publish()
            .topic_arn(notification.topic_arn())
            .message(notification.message())
            .subject(notification.subject())
            .send()
            .await
            .map_err(|e| NotifierError::publish(notification.topic_arn(), DisplayErrorContext(e)))?;

        Ok(PublishReceipt {
            message_id: output.message_id().map(str::to_string),
        })
    }

    fn name(&self) -> String {
        "sns".to_string()
    }
}
