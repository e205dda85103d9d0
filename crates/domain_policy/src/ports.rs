//! Policy storage port

use async_trait::async_trait;

use core_kernel::PolicyId;

use crate::error::PolicyError;
use crate::policy::{NewPolicy, Policy, PolicyPatch};

/// Policy storage scoped by the signed-in identity
///
/// Underwriters only ever see and change their own policies. Admins, and
/// callers with no identity, see every policy.
#[async_trait]
pub trait PolicyPort: Send + Sync {
    /// Lists the visible policies in issuance order
    async fn list_all(&self) -> Result<Vec<Policy>, PolicyError>;

    /// Fetches one policy
    ///
    /// Fails with `NotFound` before ownership is considered, then with
    /// `Unauthorized` for an underwriter who does not own it.
    async fn get_by_id(&self, id: PolicyId) -> Result<Policy, PolicyError>;

    /// Issues a policy, assigning the next id and the creation time
    async fn create(&self, policy: NewPolicy) -> Result<Policy, PolicyError>;

    /// Applies a patch after the same checks as `get_by_id`
    async fn update(&self, id: PolicyId, patch: PolicyPatch) -> Result<Policy, PolicyError>;

    /// The most recently issued visible policies, newest first
    async fn recent(&self, limit: usize) -> Result<Vec<Policy>, PolicyError>;

    /// Whether any operation is in flight
    fn is_busy(&self) -> bool;
}
