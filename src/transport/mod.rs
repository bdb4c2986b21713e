//! Messaging transports notifications are published through.

mod memory;
mod publisher;

#[cfg(feature = "sns")]
mod sns;

pub use memory::MemoryPublisher;
pub use publisher::{PublishReceipt, Publisher};

#[cfg(feature = "sns")]
pub use sns::SnsPublisher;
