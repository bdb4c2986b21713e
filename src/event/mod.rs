//! Inbound types: DynamoDB stream events and the invocation identity.

mod identity;
mod record;

pub use identity::InvocationIdentity;
pub use record::{ChangeRecord, StreamEvent, StreamRecord};
