//! Dashboard queries

use serde::Serialize;

use domain_policy::Policy;

use crate::error::AppError;
use crate::guards::{require_admin, require_underwriter};
use crate::AppContext;

/// Policies shown on the underwriter dashboard
pub const RECENT_POLICY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub underwriter_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderwriterSummary {
    pub display_name: String,
    pub recent_policies: Vec<Policy>,
}

pub async fn admin_summary(ctx: &AppContext) -> Result<AdminSummary, AppError> {
    require_admin(ctx)?;
    Ok(AdminSummary {
        underwriter_count: ctx.underwriters.count().await?,
    })
}

pub async fn underwriter_summary(ctx: &AppContext) -> Result<UnderwriterSummary, AppError> {
    let identity = require_underwriter(ctx)?;
    Ok(UnderwriterSummary {
        display_name: identity.name,
        recent_policies: ctx.policies.recent(RECENT_POLICY_LIMIT).await?,
    })
}
