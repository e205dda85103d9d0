//! Pre-built Test Fixtures
//!
//! Known demo logins, dates and identifiers shared by the test suites.

use chrono::NaiveDate;

use core_kernel::{PolicyId, UnderwriterId};

/// Demo login pairs
pub struct LoginFixtures;

impl LoginFixtures {
    pub const ADMIN_LOGIN: &'static str = "admin";
    pub const ADMIN_PASSWORD: &'static str = "admin";
    pub const SEED_LOGIN: &'static str = "underwriter1";
    pub const SEED_PASSWORD: &'static str = "Pass@123";
}

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// Builds a date, panicking on an impossible one
    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
    }

    /// Start date used by the standard policy scenario
    pub fn policy_start() -> NaiveDate {
        Self::ymd(2025, 1, 1)
    }

    /// One year after [`DateFixtures::policy_start`]
    pub fn policy_end() -> NaiveDate {
        Self::ymd(2026, 1, 1)
    }

    /// A birth date well over 18 years before [`DateFixtures::joining`]
    pub fn adult_birth() -> NaiveDate {
        Self::ymd(1990, 5, 20)
    }

    pub fn joining() -> NaiveDate {
        Self::ymd(2025, 6, 1)
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// The seeded underwriter
    pub fn seed_underwriter() -> UnderwriterId {
        UnderwriterId::from_sequence(1)
    }

    /// The first underwriter registered after the seed
    pub fn second_underwriter() -> UnderwriterId {
        UnderwriterId::from_sequence(2)
    }

    pub fn first_policy() -> PolicyId {
        PolicyId::from_sequence(1)
    }
}
