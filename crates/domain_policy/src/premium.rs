//! Premium tariff and cover terms
//!
//! Premiums are a flat amount per insurance type, charged in rupees. Cover
//! always runs for one calendar year from the start date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{CoreError, CoverPeriod, Money};

use crate::policy::InsuranceType;

/// Flat premium for comprehensive cover
pub const FULL_INSURANCE_PREMIUM: Decimal = dec!(3000);

/// Flat premium for third-party cover
pub const THIRD_PARTY_PREMIUM: Decimal = dec!(5000);

/// Returns the premium charged for an insurance type
pub fn premium_for(insurance_type: InsuranceType) -> Money {
    let amount = match insurance_type {
        InsuranceType::FullInsurance => FULL_INSURANCE_PREMIUM,
        InsuranceType::ThirdParty => THIRD_PARTY_PREMIUM,
    };
    Money::inr(amount)
}

/// Premium and cover period derived for a new policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTerms {
    pub premium: Money,
    pub period: CoverPeriod,
}

/// Derives the premium and one-year cover period for a new policy
///
/// # Errors
///
/// Returns `CoreError::Temporal` when the end date falls outside the calendar.
pub fn derive_terms(
    insurance_type: InsuranceType,
    from_date: NaiveDate,
) -> Result<PolicyTerms, CoreError> {
    Ok(PolicyTerms {
        premium: premium_for(insurance_type),
        period: CoverPeriod::one_year_from(from_date)?,
    })
}
