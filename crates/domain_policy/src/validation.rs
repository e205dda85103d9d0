//! Policy issuance form
//!
//! # Rules
//!
//! - Vehicle number is required, at most 10 characters
//! - Customer name is required, at most 50 characters, letters and spaces only
//! - Engine and chassis numbers are required
//! - Phone number is 10 digits and does not start with 0
//! - Premium is greater than zero
//! - Cover ends after it starts
//!
//! Premium and end date are normally filled in by [`PolicyForm::apply_derived_terms`]
//! whenever the insurance type or start date changes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use core_kernel::rules::{letters_and_spaces, positive_amount, summarize, ten_digit_phone};
use core_kernel::{Money, UnderwriterId};

use crate::error::PolicyError;
use crate::policy::{InsuranceType, NewPolicy, VehicleType};
use crate::premium::derive_terms;

/// Underwriter form for issuing a vehicle policy
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_cover_dates"))]
pub struct PolicyForm {
    #[validate(length(min = 1, max = 10, message = "must be between 1 and 10 characters"))]
    pub vehicle_number: String,
    pub vehicle_type: VehicleType,
    #[validate(
        length(min = 1, max = 50, message = "must be between 1 and 50 characters"),
        custom(function = "letters_and_spaces")
    )]
    pub customer_name: String,
    #[serde(alias = "engineNo")]
    #[validate(length(min = 1, message = "is required"))]
    pub engine_number: String,
    #[serde(alias = "chassisNo")]
    #[validate(length(min = 1, message = "is required"))]
    pub chassis_number: String,
    #[serde(alias = "phoneNo")]
    #[validate(custom(function = "ten_digit_phone"))]
    pub phone_number: String,
    #[validate(custom(function = "positive_amount"))]
    pub premium_amount: Decimal,
    pub insurance_type: InsuranceType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

fn validate_cover_dates(form: &PolicyForm) -> Result<(), ValidationError> {
    if form.to_date > form.from_date {
        Ok(())
    } else {
        let mut error = ValidationError::new("cover_dates");
        error.message = Some(Cow::Borrowed("to date must be after from date"));
        Err(error)
    }
}

impl PolicyForm {
    /// Starts a form with derived premium and end date already filled in
    ///
    /// The text fields are left empty for the caller to complete.
    pub fn new(
        vehicle_type: VehicleType,
        insurance_type: InsuranceType,
        from_date: NaiveDate,
    ) -> Result<Self, PolicyError> {
        let mut form = Self {
            vehicle_number: String::new(),
            vehicle_type,
            customer_name: String::new(),
            engine_number: String::new(),
            chassis_number: String::new(),
            phone_number: String::new(),
            premium_amount: Decimal::ZERO,
            insurance_type,
            from_date,
            to_date: from_date,
        };
        form.apply_derived_terms()?;
        Ok(form)
    }

    /// Recomputes premium and end date from insurance type and start date
    pub fn apply_derived_terms(&mut self) -> Result<(), PolicyError> {
        let terms = derive_terms(self.insurance_type, self.from_date)?;
        self.premium_amount = terms.premium.amount();
        self.to_date = terms.period.to;
        Ok(())
    }

    /// Validates the form and converts it into an issuance request
    ///
    /// `owner` is the signed-in underwriter; the form itself never carries it.
    ///
    /// # Errors
    ///
    /// `PolicyError::Validation` listing every failed rule
    pub fn into_new_policy(self, owner: UnderwriterId) -> Result<NewPolicy, PolicyError> {
        self.validate()
            .map_err(|errors| PolicyError::validation(summarize(&errors)))?;

        Ok(NewPolicy {
            vehicle_number: self.vehicle_number.trim().to_string(),
            vehicle_type: self.vehicle_type,
            customer_name: self.customer_name.trim().to_string(),
            engine_number: self.engine_number.trim().to_string(),
            chassis_number: self.chassis_number.trim().to_string(),
            phone_number: self.phone_number,
            premium_amount: Money::inr(self.premium_amount),
            insurance_type: self.insurance_type,
            from_date: self.from_date,
            to_date: self.to_date,
            owner_underwriter_id: owner,
        })
    }
}
