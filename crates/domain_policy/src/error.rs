//! Policy domain errors
//!
//! This module defines all error types that can occur within the
//! vehicle policy domain.

use thiserror::Error;

use core_kernel::{CoreError, PolicyId};

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// No policy has the requested id
    #[error("Policy not found")]
    NotFound { id: PolicyId },

    /// The signed-in underwriter does not own the policy
    #[error("Unauthorized access to policy")]
    Unauthorized { id: PolicyId },

    /// The issuance form failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// A kernel rule failed, such as cover dates past the calendar end
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PolicyError {
    pub fn not_found(id: PolicyId) -> Self {
        PolicyError::NotFound { id }
    }

    pub fn unauthorized(id: PolicyId) -> Self {
        PolicyError::Unauthorized { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        PolicyError::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PolicyError::NotFound { .. })
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PolicyError::Unauthorized { .. })
    }
}
