//! In-memory publisher.

use super::{PublishReceipt, Publisher};
use crate::core::Notification;
use crate::error::{NotifierError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Publisher that keeps every notification in memory, in publish order.
///
/// Useful for dry runs and tests. It can be told to fail on a given call to
/// exercise transport errors.
///
/// # Examples
///
/// ```rust
/// use adoption_notifier::transport::MemoryPublisher;
///
/// // Second publish fails, first and later ones succeed.
/// let publisher = MemoryPublisher::new().failing_on(1);
/// assert!(publisher.published().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    state: Mutex<State>,
    fail_on: Option<usize>,
}

#[derive(Debug, Default)]
struct State {
    calls: usize,
    published: Vec<Notification>,
}

impl MemoryPublisher {
    /// Create an empty publisher that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the publish call with the given zero-based index.
    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }

    /// Notifications accepted so far.
    pub fn published(&self) -> Vec<Notification> {
        self.state.lock().published.clone()
    }

    /// Number of publish calls, including failed ones.
    pub fn calls(&self) -> usize {
        self.state.lock().calls
    }
}

#[async_trait]
impl Publisher for MemoryPublisher {
    async fn publish(&self, notification: &Notification) -> Result<PublishReceipt> {
        let mut state = self.state.lock();
        let call = state.calls;
        state.calls += 1;

        if self.fail_on == Some(call) {
            return Err(NotifierError::publish(
                notification.topic_arn(),
                format!("simulated failure on call {call}"),
            ));
        }

        state.published.push(notification.clone());
        Ok(PublishReceipt {
            message_id: Some(format!("memory-{call}")),
        })
    }

    fn name(&self) -> String {
        "memory".to_string()
    }
}
