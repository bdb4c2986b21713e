//! Invocation identity parsing.

use crate::error::{NotifierError, Result};

const REGION_SEGMENT: usize = 3;
const ACCOUNT_SEGMENT: usize = 4;

/// Region and account of the running function, taken from its ARN.
///
/// # Examples
///
/// ```rust
/// use adoption_notifier::event::InvocationIdentity;
///
/// let identity =
///     InvocationIdentity::parse("arn:aws:lambda:us-east-1:123456789012:function:f").unwrap();
/// assert_eq!(identity.region(), "us-east-1");
/// assert_eq!(identity.account_id(), "123456789012");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationIdentity {
    region: String,
    account_id: String,
}

impl InvocationIdentity {
    /// Split a colon-delimited identity and pick region (4th) and account (5th).
    ///
    /// Segments are taken positionally and verbatim; an empty segment is kept
    /// as an empty region or account.
    ///
    /// # Errors
    ///
    /// Returns `NotifierError::InvalidIdentity` when fewer than five segments exist.
    pub fn parse(arn: &str) -> Result<Self> {
        let segments: Vec<&str> = arn.split(':').collect();
        if segments.len() <= ACCOUNT_SEGMENT {
            return Err(NotifierError::InvalidIdentity {
                arn: arn.to_string(),
                segments: segments.len(),
            });
        }

        Ok(Self {
            region: segments[REGION_SEGMENT].to_string(),
            account_id: segments[ACCOUNT_SEGMENT].to_string(),
        })
    }

    /// Region the function runs in.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Account that owns the function.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}
