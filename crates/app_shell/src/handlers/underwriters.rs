//! Underwriter administration (admin only)
//!
//! The directory holds the underwriter records and the session store holds
//! their login credentials. These workflows update both. Nothing rolls back a
//! directory write if the credential step fails.

use serde::Serialize;
use tracing::{info, instrument, warn};

use core_kernel::UnderwriterId;
use domain_underwriter::{PasswordChangeForm, Underwriter, UnderwriterForm, UnderwriterPatch};

use crate::error::AppError;
use crate::guards::require_admin;
use crate::AppContext;

/// A newly registered underwriter with the login name to hand out
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUnderwriter {
    pub underwriter: Underwriter,
    pub login_name: String,
}

pub async fn list_underwriters(ctx: &AppContext) -> Result<Vec<Underwriter>, AppError> {
    require_admin(ctx)?;
    Ok(ctx.underwriters.list_all().await?)
}

pub async fn get_underwriter(ctx: &AppContext, id: UnderwriterId) -> Result<Underwriter, AppError> {
    require_admin(ctx)?;
    Ok(ctx.underwriters.get_by_id(id).await?)
}

/// Validates the form, creates the record and registers its credentials
#[instrument(skip(ctx, form))]
pub async fn register_underwriter(
    ctx: &AppContext,
    form: UnderwriterForm,
) -> Result<RegisteredUnderwriter, AppError> {
    require_admin(ctx)?;

    let password = form.password.clone();
    let new = form.into_new_underwriter()?;
    let underwriter = ctx.underwriters.create(new).await?;
    let login_name = ctx.session.register_credential(underwriter.id, &password);

    info!(id = %underwriter.id, login = %login_name, "Underwriter registered");
    Ok(RegisteredUnderwriter {
        underwriter,
        login_name,
    })
}

/// Replaces an underwriter's password in the credentials and the record
///
/// # Errors
///
/// - `NotFound` when the underwriter does not exist
/// - `PasswordChangeRejected` when the underwriter has no credentials
#[instrument(skip(ctx, form), fields(id = %id))]
pub async fn change_password(
    ctx: &AppContext,
    id: UnderwriterId,
    form: PasswordChangeForm,
) -> Result<Underwriter, AppError> {
    require_admin(ctx)?;

    let password = form.into_password()?;
    ctx.underwriters.get_by_id(id).await?;

    if !ctx.session.change_credential_password(id, &password) {
        warn!(id = %id, "Password change rejected");
        return Err(AppError::PasswordChangeRejected);
    }

    let updated = ctx
        .underwriters
        .update(id, UnderwriterPatch::password(password))
        .await?;
    info!(id = %id, "Password updated");
    Ok(updated)
}
