//! Property-Based Test Generators
//!
//! Proptest strategies that produce values the entry forms accept, plus
//! `fake`-backed helpers for realistic random names.

use chrono::{Duration, NaiveDate};
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;

use domain_policy::{InsuranceType, VehicleType};

use crate::builders::{PolicyFormBuilder, UnderwriterFormBuilder};
use crate::fixtures::DateFixtures;

/// Longest name the forms accept
pub const MAX_NAME_LENGTH: usize = 50;

/// Reduces a generated name to letters and spaces within the form limit
pub fn sanitize_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .take(MAX_NAME_LENGTH)
        .collect();
    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() {
        "Test Person".to_string()
    } else {
        cleaned
    }
}

/// A random person's name that passes the name rules
pub fn fake_person_name() -> String {
    let raw: String = Name().fake();
    sanitize_name(&raw)
}

/// A registration form for a random underwriter
pub fn fake_underwriter_form() -> domain_underwriter::UnderwriterForm {
    UnderwriterFormBuilder::new()
        .with_name(fake_person_name())
        .build()
}

/// An issuance form for a random customer
pub fn fake_policy_form() -> domain_policy::PolicyForm {
    PolicyFormBuilder::new()
        .with_customer_name(fake_person_name())
        .build()
}

/// Strategy for insurance types
pub fn insurance_type_strategy() -> impl Strategy<Value = InsuranceType> {
    prop_oneof![Just(InsuranceType::FullInsurance), Just(InsuranceType::ThirdParty)]
}

/// Strategy for vehicle types
pub fn vehicle_type_strategy() -> impl Strategy<Value = VehicleType> {
    prop_oneof![Just(VehicleType::TwoWheeler), Just(VehicleType::FourWheeler)]
}

/// Strategy for valid phone numbers: ten digits, no leading zero
pub fn phone_number_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{9}"
}

/// Strategy for valid names: letters and single spaces, at most 50 characters
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,20}( [A-Za-z]{1,20}){0,1}"
}

/// Strategy for dates between 2000 and roughly 2100
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..36_500).prop_map(|days| DateFixtures::ymd(2000, 1, 1) + Duration::days(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name_strips_punctuation() {
        assert_eq!(sanitize_name("Dr. Mary-Jane O'Neil"), "Dr MaryJane ONeil");
        assert_eq!(sanitize_name("1234"), "Test Person");
        assert!(sanitize_name(&"x".repeat(80)).len() <= MAX_NAME_LENGTH);
    }

    #[test]
    fn test_fake_forms_are_valid() {
        for _ in 0..20 {
            assert!(fake_underwriter_form().into_new_underwriter().is_ok());
        }
    }

    proptest! {
        #[test]
        fn prop_generated_policy_forms_validate(
            name in name_strategy(),
            phone in phone_number_strategy(),
            insurance_type in insurance_type_strategy(),
            vehicle_type in vehicle_type_strategy(),
            from in date_strategy(),
        ) {
            let form = PolicyFormBuilder::new()
                .with_customer_name(name)
                .with_phone_number(phone)
                .with_insurance_type(insurance_type)
                .with_vehicle_type(vehicle_type)
                .with_from_date(from)
                .build();
            let owner = crate::fixtures::IdFixtures::seed_underwriter();
            prop_assert!(form.into_new_policy(owner).is_ok());
        }
    }
}
