//! Underwriter entry forms
//!
//! # Registration Rules
//!
//! - Name is required, at most 50 characters, letters and spaces only
//! - Password is required and must contain a special character
//! - The underwriter must be at least 18 on the joining date
//!
//! # Password Change Rules
//!
//! - New password is required and must contain a special character

use chrono::NaiveDate;
use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use core_kernel::age_on;
use core_kernel::rules::{contains_special_character, letters_and_spaces, summarize};

use crate::error::UnderwriterError;
use crate::underwriter::NewUnderwriter;

/// Minimum age on the joining date
pub const MINIMUM_JOINING_AGE: i32 = 18;

/// Admin form for registering an underwriter
#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_joining_age"))]
pub struct UnderwriterForm {
    #[validate(
        length(min = 1, max = 50, message = "must be between 1 and 50 characters"),
        custom(function = "letters_and_spaces")
    )]
    pub name: String,
    #[serde(alias = "dob")]
    pub date_of_birth: NaiveDate,
    pub joining_date: NaiveDate,
    #[validate(
        length(min = 1, message = "is required"),
        custom(function = "contains_special_character")
    )]
    pub password: String,
}

fn validate_joining_age(form: &UnderwriterForm) -> Result<(), ValidationError> {
    if age_on(form.date_of_birth, form.joining_date) >= MINIMUM_JOINING_AGE {
        Ok(())
    } else {
        let mut error = ValidationError::new("joining_age");
        error.message = Some(Cow::Borrowed(
            "underwriter must be at least 18 years old on the joining date",
        ));
        Err(error)
    }
}

impl UnderwriterForm {
    pub fn new(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        joining_date: NaiveDate,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            joining_date,
            password: password.into(),
        }
    }

    /// Validates the form and converts it into a create request
    ///
    /// # Errors
    ///
    /// `UnderwriterError::Validation` listing every failed rule
    pub fn into_new_underwriter(self) -> Result<NewUnderwriter, UnderwriterError> {
        self.validate()
            .map_err(|errors| UnderwriterError::validation(summarize(&errors)))?;

        Ok(NewUnderwriter {
            name: self.name.trim().to_string(),
            date_of_birth: self.date_of_birth,
            joining_date: self.joining_date,
            password: Some(self.password),
        })
    }
}

impl std::fmt::Debug for UnderwriterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnderwriterForm")
            .field("name", &self.name)
            .field("date_of_birth", &self.date_of_birth)
            .field("joining_date", &self.joining_date)
            .finish_non_exhaustive()
    }
}

/// Admin form for resetting an underwriter's password
#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeForm {
    #[validate(
        length(min = 1, message = "is required"),
        custom(function = "contains_special_character")
    )]
    pub new_password: String,
}

impl PasswordChangeForm {
    pub fn new(new_password: impl Into<String>) -> Self {
        Self {
            new_password: new_password.into(),
        }
    }

    /// Validates the form and returns the new password
    pub fn into_password(self) -> Result<String, UnderwriterError> {
        self.validate()
            .map_err(|errors| UnderwriterError::validation(summarize(&errors)))?;
        Ok(self.new_password)
    }
}

impl std::fmt::Debug for PasswordChangeForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChangeForm").finish_non_exhaustive()
    }
}
