//! The stream-record-to-notification handler.

use super::notification::{NAME_ATTRIBUTE, Notification, TopicArn};
use super::{NotifierBuilder, NotifierSettings};
use crate::error::{NotifierError, Result};
use crate::event::{ChangeRecord, InvocationIdentity, StreamEvent};
use crate::transport::Publisher;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of one successful invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandleSummary {
    /// Notifications published, one per record.
    pub published: usize,
}

/// Publishes an adoption notification for every record of a stream event.
///
/// Records are handled strictly in order and each publish is awaited before
/// the next record is looked at. The first error aborts the invocation;
/// notifications already sent stay sent, and nothing is retried here.
///
/// # Examples
///
/// ```rust
/// use adoption_notifier::prelude::*;
/// use adoption_notifier::transport::MemoryPublisher;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<()> {
/// let publisher = Arc::new(MemoryPublisher::new());
/// let notifier = Notifier::new(publisher.clone(), NotifierSettings::default());
///
/// let event: StreamEvent = serde_json::from_str(
///     r#"{"Records":[{"dynamodb":{"NewImage":{"dogName":{"S":"Rex"}}}}]}"#,
/// ).unwrap();
///
/// notifier
///     .handle(&event, "arn:aws:lambda:us-east-1:123456789012:function:f")
///     .await?;
///
/// assert_eq!(publisher.published()[0].message(), "Rex has been adopted!");
/// # Ok(())
/// # }
/// ```
pub struct Notifier {
    publisher: Arc<dyn Publisher>,
    settings: NotifierSettings,
}

impl Notifier {
    /// Create a notifier from a publisher and already validated settings.
    pub fn new(publisher: Arc<dyn Publisher>, settings: NotifierSettings) -> Self {
        Self {
            publisher,
            settings,
        }
    }

    /// Create a new builder for constructing a notifier.
    pub fn builder() -> NotifierBuilder {
        NotifierBuilder::new()
    }

    /// Settings in effect.
    pub fn settings(&self) -> &NotifierSettings {
        &self.settings
    }

    /// Handle one invocation.
    ///
    /// `function_arn` is the invoked function's ARN; the topic is placed in its
    /// region and account. The identity is checked before any record, so a
    /// malformed ARN fails even an empty event.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `function_arn` has fewer than five segments
    /// - A record lacks `dynamodb.NewImage.dogName` or it is not a string
    /// - The publisher fails
    pub async fn handle(&self, event: &StreamEvent, function_arn: &str) -> Result<HandleSummary> {
        let result = self.publish_all(event, function_arn).await;

        match &result {
            Ok(summary) => info!(
                records = event.len(),
                published = summary.published,
                "Invocation handled"
            ),
            Err(e) => warn!(records = event.len(), error = %e, "Invocation failed"),
        }

        result
    }

    async fn publish_all(&self, event: &StreamEvent, function_arn: &str) -> Result<HandleSummary> {
        let identity = InvocationIdentity::parse(function_arn)?;
        let topic = TopicArn::for_identity(&identity);

        let mut summary = HandleSummary::default();
        for (index, raw) in event.records.iter().enumerate() {
            let record = ChangeRecord::decode(raw)
                .map_err(|source| NotifierError::Record { index, source })?;
            let dog_name = record
                .new_image_string(NAME_ATTRIBUTE)
                .map_err(|source| NotifierError::Record { index, source })?;

            let notification = Notification::adoption(&topic, &dog_name);
            let receipt = self.publisher.publish(&notification).await?;
            summary.published += 1;

            debug!(
                index,
                event_id = record.event_id().unwrap_or("-"),
                event_name = record.event_name().unwrap_or("-"),
                message_id = receipt.message_id.as_deref().unwrap_or("-"),
                topic_arn = notification.topic_arn(),
                "Published adoption notification"
            );
        }

        Ok(summary)
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("publisher", &self.publisher.name())
            .field("settings", &self.settings)
            .finish()
    }
}
