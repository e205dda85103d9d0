//! Underwriter domain errors

use thiserror::Error;

use core_kernel::UnderwriterId;

/// Errors that can occur in the underwriter domain
#[derive(Debug, Error)]
pub enum UnderwriterError {
    /// No underwriter has the requested id
    #[error("Underwriter not found")]
    NotFound { id: UnderwriterId },

    /// A registration or password form failed validation
    #[error("Validation error: {0}")]
    Validation(String),
}

impl UnderwriterError {
    pub fn not_found(id: UnderwriterId) -> Self {
        UnderwriterError::NotFound { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        UnderwriterError::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, UnderwriterError::NotFound { .. })
    }
}
