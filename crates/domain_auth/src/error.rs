//! Authentication domain errors

use thiserror::Error;

use crate::ports::StorageError;

/// Errors that can occur in the auth domain
#[derive(Debug, Error)]
pub enum AuthError {
    /// No admin or underwriter credential matched
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The session could not be written to durable storage
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    /// The identity could not be encoded for storage
    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AuthError {
    /// Returns true when the caller supplied a wrong login name or password
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials)
    }
}
