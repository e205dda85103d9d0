//! Underwriter Directory Port
//!
//! The contract the application shell programs against. The in-memory
//! [`UnderwriterDirectory`](crate::UnderwriterDirectory) is the only adapter
//! today; a remote directory would implement the same trait.

use async_trait::async_trait;

use core_kernel::UnderwriterId;

use crate::error::UnderwriterError;
use crate::underwriter::{NewUnderwriter, Underwriter, UnderwriterPatch};

/// Operations on the underwriter directory
///
/// All methods complete after a simulated request delay and return copies;
/// callers never hold references into the directory.
#[async_trait]
pub trait UnderwriterPort: Send + Sync {
    /// All underwriters in insertion order
    async fn list_all(&self) -> Result<Vec<Underwriter>, UnderwriterError>;

    /// One underwriter, or `UnderwriterError::NotFound`
    async fn get_by_id(&self, id: UnderwriterId) -> Result<Underwriter, UnderwriterError>;

    /// Assigns the next id and stores the record
    async fn create(&self, underwriter: NewUnderwriter) -> Result<Underwriter, UnderwriterError>;

    /// Merges `patch` into an existing record
    ///
    /// There is no ownership check: any caller may update any underwriter.
    async fn update(
        &self,
        id: UnderwriterId,
        patch: UnderwriterPatch,
    ) -> Result<Underwriter, UnderwriterError>;

    /// Number of underwriters
    async fn count(&self) -> Result<usize, UnderwriterError>;

    /// True while any operation is in flight
    fn is_busy(&self) -> bool;
}
