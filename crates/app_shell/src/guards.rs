//! Route guards
//!
//! Each guard returns the identity allowed through, or asks the navigator to
//! go to the login surface and fails.

use tracing::warn;

use domain_auth::{Identity, Role, Route};

use crate::error::AppError;
use crate::AppContext;

/// Any signed-in identity
pub fn require_authenticated(ctx: &AppContext) -> Result<Identity, AppError> {
    match ctx.session.current_identity() {
        Some(identity) => Ok(identity),
        None => {
            warn!("Blocked anonymous access");
            ctx.navigator.navigate(Route::Login);
            Err(AppError::Unauthenticated {
                redirect: Route::Login,
            })
        }
    }
}

/// The administrator
pub fn require_admin(ctx: &AppContext) -> Result<Identity, AppError> {
    require_role(ctx, Role::Admin)
}

/// An underwriter
pub fn require_underwriter(ctx: &AppContext) -> Result<Identity, AppError> {
    require_role(ctx, Role::Underwriter)
}

fn require_role(ctx: &AppContext, role: Role) -> Result<Identity, AppError> {
    let identity = require_authenticated(ctx)?;
    if identity.has_role(role) {
        return Ok(identity);
    }

    warn!(id = %identity.id, required = %role, "Blocked access for wrong role");
    ctx.navigator.navigate(Route::Login);
    Err(AppError::Forbidden {
        redirect: Route::Login,
    })
}
