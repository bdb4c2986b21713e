//! Core notifier types.

mod builder;
mod notification;
mod notifier;
mod settings;

pub use builder::NotifierBuilder;
pub use notification::{
    NAME_ATTRIBUTE, Notification, SUBJECT, TOPIC_NAME, TOPIC_PARTITION, TOPIC_SERVICE, TopicArn,
};
pub use notifier::{HandleSummary, Notifier};
pub use settings::{ENV_PREFIX, NotifierSettings};
