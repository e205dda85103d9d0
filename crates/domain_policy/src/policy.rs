//! Vehicle policy records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{CoverPeriod, Money, PolicyId, UnderwriterId};
use domain_auth::{Identity, Role};

/// Kind of insured vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "two-wheeler")]
    TwoWheeler,
    #[serde(rename = "four-wheeler")]
    FourWheeler,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::TwoWheeler => f.write_str("two-wheeler"),
            VehicleType::FourWheeler => f.write_str("four-wheeler"),
        }
    }
}

/// Type of cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceType {
    #[serde(rename = "Full Insurance")]
    FullInsurance,
    #[serde(rename = "Third Party")]
    ThirdParty,
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsuranceType::FullInsurance => f.write_str("Full Insurance"),
            InsuranceType::ThirdParty => f.write_str("Third Party"),
        }
    }
}

/// An issued vehicle policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: PolicyId,
    pub vehicle_number: String,
    pub vehicle_type: VehicleType,
    pub customer_name: String,
    #[serde(rename = "engineNo", alias = "engineNumber")]
    pub engine_number: String,
    #[serde(rename = "chassisNo", alias = "chassisNumber")]
    pub chassis_number: String,
    #[serde(rename = "phoneNo", alias = "phoneNumber")]
    pub phone_number: String,
    pub premium_amount: Money,
    pub insurance_type: InsuranceType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub owner_underwriter_id: UnderwriterId,
    pub created_at: DateTime<Utc>,
}

impl Policy {
    /// The covered period
    pub fn cover_period(&self) -> CoverPeriod {
        CoverPeriod {
            from: self.from_date,
            to: self.to_date,
        }
    }

    /// Whether `identity` may read and change this policy
    ///
    /// Underwriters are limited to their own policies. Admins, and callers
    /// with no identity at all, are not constrained here; route guards keep
    /// anonymous callers out.
    pub fn is_accessible_by(&self, identity: Option<&Identity>) -> bool {
        match identity {
            Some(identity) if identity.role == Role::Underwriter => {
                identity.underwriter_id() == Some(self.owner_underwriter_id)
            }
            _ => true,
        }
    }

    /// Merges the fields present in `patch`
    ///
    /// The premium is only replaced when the patch carries one; changing the
    /// insurance type alone keeps the premium charged at issuance.
    pub fn apply(&mut self, patch: PolicyPatch) {
        if let Some(vehicle_number) = patch.vehicle_number {
            self.vehicle_number = vehicle_number;
        }
        if let Some(vehicle_type) = patch.vehicle_type {
            self.vehicle_type = vehicle_type;
        }
        if let Some(customer_name) = patch.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(engine_number) = patch.engine_number {
            self.engine_number = engine_number;
        }
        if let Some(chassis_number) = patch.chassis_number {
            self.chassis_number = chassis_number;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(premium_amount) = patch.premium_amount {
            self.premium_amount = premium_amount;
        }
        if let Some(insurance_type) = patch.insurance_type {
            self.insurance_type = insurance_type;
        }
        if let Some(from_date) = patch.from_date {
            self.from_date = from_date;
        }
        if let Some(to_date) = patch.to_date {
            self.to_date = to_date;
        }
    }
}

/// Everything needed to issue a policy; the ledger assigns id and timestamp
///
/// `owner_underwriter_id` is supplied by the caller from the signed-in
/// identity. The ledger does not look it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPolicy {
    pub vehicle_number: String,
    pub vehicle_type: VehicleType,
    pub customer_name: String,
    #[serde(rename = "engineNo", alias = "engineNumber")]
    pub engine_number: String,
    #[serde(rename = "chassisNo", alias = "chassisNumber")]
    pub chassis_number: String,
    #[serde(rename = "phoneNo", alias = "phoneNumber")]
    pub phone_number: String,
    pub premium_amount: Money,
    pub insurance_type: InsuranceType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub owner_underwriter_id: UnderwriterId,
}

impl NewPolicy {
    /// Attaches the assigned id and creation time
    pub fn issue(self, id: PolicyId, created_at: DateTime<Utc>) -> Policy {
        Policy {
            id,
            vehicle_number: self.vehicle_number,
            vehicle_type: self.vehicle_type,
            customer_name: self.customer_name,
            engine_number: self.engine_number,
            chassis_number: self.chassis_number,
            phone_number: self.phone_number,
            premium_amount: self.premium_amount,
            insurance_type: self.insurance_type,
            from_date: self.from_date,
            to_date: self.to_date,
            owner_underwriter_id: self.owner_underwriter_id,
            created_at,
        }
    }
}

/// Partial update of a policy
///
/// Ownership, id and creation time cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyPatch {
    pub vehicle_number: Option<String>,
    pub vehicle_type: Option<VehicleType>,
    pub customer_name: Option<String>,
    pub engine_number: Option<String>,
    pub chassis_number: Option<String>,
    pub phone_number: Option<String>,
    pub premium_amount: Option<Money>,
    pub insurance_type: Option<InsuranceType>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl PolicyPatch {
    /// A patch that only changes the insurance type
    pub fn insurance_type(insurance_type: InsuranceType) -> Self {
        Self {
            insurance_type: Some(insurance_type),
            ..Default::default()
        }
    }
}
