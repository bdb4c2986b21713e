//! Notification value objects.

use crate::event::InvocationIdentity;
use std::fmt;

/// Partition every topic ARN is built in.
pub const TOPIC_PARTITION: &str = "aws";

/// Service segment of a topic ARN.
pub const TOPIC_SERVICE: &str = "sns";

/// Name of the destination topic.
pub const TOPIC_NAME: &str = "myAlert";

/// Subject line of every notification.
pub const SUBJECT: &str = "Dog adopted!";

/// New-image attribute that holds the adopted dog's name.
pub const NAME_ATTRIBUTE: &str = "dogName";

/// Destination topic, `arn:aws:sns:{region}:{account}:myAlert`.
///
/// # Examples
///
/// ```rust
/// use adoption_notifier::core::TopicArn;
/// use adoption_notifier::event::InvocationIdentity;
///
/// let identity =
///     InvocationIdentity::parse("arn:aws:lambda:us-east-1:123456789012:function:f").unwrap();
/// let topic = TopicArn::for_identity(&identity);
/// assert_eq!(topic.to_string(), "arn:aws:sns:us-east-1:123456789012:myAlert");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicArn {
    region: String,
    account_id: String,
}

impl TopicArn {
    /// The alert topic in the region and account the function runs under.
    pub fn for_identity(identity: &InvocationIdentity) -> Self {
        Self {
            region: identity.region().to_string(),
            account_id: identity.account_id().to_string(),
        }
    }
}

impl fmt::Display for TopicArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            TOPIC_PARTITION, TOPIC_SERVICE, self.region, self.account_id, TOPIC_NAME
        )
    }
}

/// A message ready to hand to a publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    topic_arn: String,
    message: String,
}

impl Notification {
    /// Build the adoption announcement for `dog_name`.
    pub fn adoption(topic: &TopicArn, dog_name: &str) -> Self {
        Self {
            topic_arn: topic.to_string(),
            message: format!("{dog_name} has been adopted!"),
        }
    }

    /// Destination topic ARN.
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }

    /// Message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Subject line, always [`SUBJECT`].
    pub fn subject(&self) -> &str {
        SUBJECT
    }
}
