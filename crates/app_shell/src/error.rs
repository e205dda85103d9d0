//! Application error handling

use thiserror::Error;

use core_kernel::CoreError;
use domain_auth::{AuthError, Route};
use domain_policy::PolicyError;
use domain_underwriter::UnderwriterError;

/// Errors surfaced to the presentation layer
///
/// Display strings are the messages shown to the user.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Underwriter(#[from] UnderwriterError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Validation error: {0}")]
    Validation(String),

    /// No one is signed in; the user has been sent to `redirect`
    #[error("Sign in required")]
    Unauthenticated { redirect: Route },

    /// The signed-in role may not use this surface; the user has been sent to `redirect`
    #[error("Access denied")]
    Forbidden { redirect: Route },

    #[error("Failed to update password")]
    PasswordChangeRejected,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Where the user was redirected, for guard failures
    pub fn redirect(&self) -> Option<Route> {
        match self {
            AppError::Unauthenticated { redirect } | AppError::Forbidden { redirect } => {
                Some(*redirect)
            }
            _ => None,
        }
    }

    /// Whether this is one of the not-found errors
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::Underwriter(e) => e.is_not_found(),
            AppError::Policy(e) => e.is_not_found(),
            _ => false,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}
