//! Test Data Builders
//!
//! Builders for entry forms that pass validation by default. Tests override
//! only the fields they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use domain_policy::{InsuranceType, PolicyForm, VehicleType};
use domain_underwriter::UnderwriterForm;

use crate::fixtures::DateFixtures;

/// Builder for a valid underwriter registration form
#[derive(Debug, Clone)]
pub struct UnderwriterFormBuilder {
    name: String,
    date_of_birth: NaiveDate,
    joining_date: NaiveDate,
    password: String,
}

impl Default for UnderwriterFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UnderwriterFormBuilder {
    pub fn new() -> Self {
        Self {
            name: "Priya Sharma".to_string(),
            date_of_birth: DateFixtures::adult_birth(),
            joining_date: DateFixtures::joining(),
            password: "Start#123".to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_date_of_birth(mut self, date: NaiveDate) -> Self {
        self.date_of_birth = date;
        self
    }

    pub fn with_joining_date(mut self, date: NaiveDate) -> Self {
        self.joining_date = date;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn build(self) -> UnderwriterForm {
        UnderwriterForm::new(self.name, self.date_of_birth, self.joining_date, self.password)
    }
}

/// Builder for a valid policy issuance form
///
/// Premium and end date are derived in `build` unless overridden.
#[derive(Debug, Clone)]
pub struct PolicyFormBuilder {
    vehicle_number: String,
    vehicle_type: VehicleType,
    customer_name: String,
    engine_number: String,
    chassis_number: String,
    phone_number: String,
    insurance_type: InsuranceType,
    from_date: NaiveDate,
    premium_override: Option<Decimal>,
    to_date_override: Option<NaiveDate>,
}

impl Default for PolicyFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyFormBuilder {
    pub fn new() -> Self {
        Self {
            vehicle_number: "MH12AB1234".to_string(),
            vehicle_type: VehicleType::FourWheeler,
            customer_name: "Rahul Verma".to_string(),
            engine_number: "ENG123".to_string(),
            chassis_number: "CH123".to_string(),
            phone_number: "9876543210".to_string(),
            insurance_type: InsuranceType::FullInsurance,
            from_date: DateFixtures::policy_start(),
            premium_override: None,
            to_date_override: None,
        }
    }

    pub fn with_vehicle_number(mut self, number: impl Into<String>) -> Self {
        self.vehicle_number = number.into();
        self
    }

    pub fn with_vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = vehicle_type;
        self
    }

    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self
    }

    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = phone.into();
        self
    }

    pub fn with_insurance_type(mut self, insurance_type: InsuranceType) -> Self {
        self.insurance_type = insurance_type;
        self
    }

    pub fn with_from_date(mut self, date: NaiveDate) -> Self {
        self.from_date = date;
        self
    }

    pub fn with_premium(mut self, amount: Decimal) -> Self {
        self.premium_override = Some(amount);
        self
    }

    pub fn with_to_date(mut self, date: NaiveDate) -> Self {
        self.to_date_override = Some(date);
        self
    }

    /// Builds the form
    ///
    /// # Panics
    ///
    /// Panics if the cover end date cannot be derived from the start date.
    pub fn build(self) -> PolicyForm {
        let mut form = PolicyForm::new(self.vehicle_type, self.insurance_type, self.from_date)
            .unwrap_or_else(|e| panic!("fixture start date rejected: {e}"));
        form.vehicle_number = self.vehicle_number;
        form.customer_name = self.customer_name;
        form.engine_number = self.engine_number;
        form.chassis_number = self.chassis_number;
        form.phone_number = self.phone_number;
        if let Some(premium) = self.premium_override {
            form.premium_amount = premium;
        }
        if let Some(to_date) = self.to_date_override {
            form.to_date = to_date;
        }
        form
    }
}
