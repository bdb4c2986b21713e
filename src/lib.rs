//! # adoption-notifier
//!
//! Turn DynamoDB stream records into SNS adoption notifications.
//!
//! ## Overview
//!
//! Each record's new image carries a `dogName` string attribute. For every
//! record, in order, one message is published:
//!
//! - topic: `arn:aws:sns:{region}:{account}:myAlert`, with region and account
//!   taken from the invoked function's ARN
//! - message: `"{dogName} has been adopted!"`
//! - subject: `"Dog adopted!"`
//!
//! Errors are never swallowed or retried; the first one fails the invocation
//! and redelivery is left to the Lambda platform.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use adoption_notifier::prelude::*;
//!
//! # async fn example(event: StreamEvent, function_arn: &str) -> Result<()> {
//! let notifier = Notifier::builder()
//!     .with_env_overrides("NOTIFIER")
//!     .build()
//!     .await?;
//!
//! notifier.handle(&event, function_arn).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `sns` (default): [`transport::SnsPublisher`] and the builder's SNS default
//! - `lambda` (default): the `adoption-notifier` Lambda binary

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod event;
pub mod transport;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{
        HandleSummary, Notification, Notifier, NotifierBuilder, NotifierSettings, TopicArn,
    };
    pub use crate::error::{NotifierError, RecordError, Result};
    pub use crate::event::{ChangeRecord, InvocationIdentity, StreamEvent};
    pub use crate::transport::{PublishReceipt, Publisher};
}
