//! Error types for adoption-notifier.

use std::fmt;

/// Result type alias for adoption-notifier operations.
pub type Result<T> = std::result::Result<T, NotifierError>;

/// Errors that can occur while turning stream records into notifications.
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    /// A change record did not have the expected shape.
    #[error("Record {index} is malformed: {source}")]
    Record {
        /// Zero-based position of the record in the event
        index: usize,
        /// What was wrong with it
        #[source]
        source: RecordError,
    },

    /// The invocation identity could not be split into region and account.
    #[error("Invalid invocation identity '{arn}': expected at least 5 ':'-separated segments, found {segments}")]
    InvalidIdentity {
        /// The identity string as received
        arn: String,
        /// Number of segments found
        segments: usize,
    },

    /// The transport rejected or failed to deliver a notification.
    #[error("Failed to publish to '{topic_arn}': {reason}")]
    Publish {
        /// Destination topic of the failed publish
        topic_arn: String,
        /// Transport-provided failure description
        reason: String,
    },

    /// Failed to load settings.
    #[error("Failed to load settings: {0}")]
    Config(String),

    /// A setting has an unusable value.
    #[error("Invalid setting '{field}': {reason}")]
    InvalidSetting {
        /// The setting name
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// No transport was configured and none could be created.
    #[error("No publisher configured: {0}")]
    MissingPublisher(&'static str),
}

impl NotifierError {
    /// Create a publish error for the given topic.
    pub fn publish(topic_arn: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::Publish {
            topic_arn: topic_arn.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<config::ConfigError> for NotifierError {
    fn from(err: config::ConfigError) -> Self {
        NotifierError::Config(err.to_string())
    }
}

/// Reasons a single change record is rejected.
///
/// Paths are reported in DynamoDB stream notation, e.g. `dynamodb.NewImage.dogName`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The record JSON could not be decoded at all.
    #[error("cannot decode record: {0}")]
    Decode(String),

    /// A required field is absent.
    #[error("missing field `{0}`")]
    MissingField(String),

    /// An attribute carries a different DynamoDB type tag than required.
    #[error("field `{path}` has type {found}, expected {expected}")]
    UnexpectedType {
        /// Path of the attribute
        path: String,
        /// Required type tag
        expected: &'static str,
        /// Type tag actually present
        found: &'static str,
    },

    /// An attribute is not a DynamoDB attribute value.
    #[error("field `{path}` is not a DynamoDB attribute value: {reason}")]
    InvalidAttribute {
        /// Path of the attribute
        path: String,
        /// Decoder message
        reason: String,
    },
}
