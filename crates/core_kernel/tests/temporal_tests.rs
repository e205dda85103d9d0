//! Tests for calendar helpers

use chrono::NaiveDate;
use core_kernel::{add_years, age_on, CoverPeriod, TemporalError};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_one_year_cover_from_new_year() {
    let period = CoverPeriod::one_year_from(date(2025, 1, 1)).unwrap();
    assert_eq!(period.to, date(2026, 1, 1));
}

#[test]
fn test_cover_contains_bounds() {
    let period = CoverPeriod::one_year_from(date(2025, 3, 10)).unwrap();
    assert!(period.contains(date(2025, 3, 10)));
    assert!(period.contains(date(2026, 3, 10)));
    assert!(!period.contains(date(2026, 3, 11)));
}

#[test]
fn test_empty_period_rejected() {
    let err = CoverPeriod::new(date(2025, 1, 1), date(2025, 1, 1)).unwrap_err();
    assert!(matches!(err, TemporalError::InvalidPeriod { .. }));
}

#[test]
fn test_age_of_seeded_underwriter_at_joining() {
    assert_eq!(age_on(date(2002, 8, 2), date(2025, 4, 10)), 22);
}

#[test]
fn test_age_is_negative_before_birth() {
    assert!(age_on(date(2002, 8, 2), date(2000, 1, 1)) < 0);
}

proptest! {
    #[test]
    fn prop_add_years_keeps_age_difference(
        year in 1950i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        years in 0u32..80,
    ) {
        let start = date(year, month, day);
        let later = add_years(start, years).unwrap();
        prop_assert_eq!(age_on(start, later), years as i32);
    }
}
