//! Policy issuance and servicing (underwriter only)

use tracing::{info, instrument};

use core_kernel::{CoreError, PolicyId, UnderwriterId};
use domain_policy::{InsuranceType, Policy, PolicyForm, PolicyPatch};

use crate::error::AppError;
use crate::guards::require_underwriter;
use crate::AppContext;

pub async fn list_policies(ctx: &AppContext) -> Result<Vec<Policy>, AppError> {
    require_underwriter(ctx)?;
    Ok(ctx.policies.list_all().await?)
}

pub async fn get_policy(ctx: &AppContext, id: PolicyId) -> Result<Policy, AppError> {
    require_underwriter(ctx)?;
    Ok(ctx.policies.get_by_id(id).await?)
}

/// Issues a policy owned by the signed-in underwriter
#[instrument(skip(ctx, form))]
pub async fn issue_policy(ctx: &AppContext, form: PolicyForm) -> Result<Policy, AppError> {
    let identity = require_underwriter(ctx)?;
    let owner = identity
        .id
        .parse::<UnderwriterId>()
        .map_err(CoreError::from)?;

    let policy = ctx.policies.create(form.into_new_policy(owner)?).await?;
    info!(id = %policy.id, owner = %owner, "Policy issued");
    Ok(policy)
}

/// Switches a policy to another insurance type
///
/// The premium charged at issuance is kept as is.
#[instrument(skip(ctx), fields(id = %id))]
pub async fn change_insurance_type(
    ctx: &AppContext,
    id: PolicyId,
    insurance_type: InsuranceType,
) -> Result<Policy, AppError> {
    require_underwriter(ctx)?;

    let current = ctx.policies.get_by_id(id).await?;
    if current.insurance_type == insurance_type {
        return Err(AppError::validation("Please select a different insurance type"));
    }

    let updated = ctx
        .policies
        .update(id, PolicyPatch::insurance_type(insurance_type))
        .await?;
    info!(id = %id, insurance_type = %insurance_type, "Insurance type changed");
    Ok(updated)
}
