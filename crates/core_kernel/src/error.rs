//! Core error types used across the system

use thiserror::Error;
use crate::identifiers::IdentifierError;
use crate::temporal::TemporalError;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),
}
