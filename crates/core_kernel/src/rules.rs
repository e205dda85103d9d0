//! Field rules shared by the entry forms
//!
//! These plug into `validator` derives as `custom` functions. The services
//! trust their inputs; these rules run on the caller side before a request is
//! made.

use rust_decimal::Decimal;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Characters that count as "special" in a password
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Names: letters and spaces only, at least one letter
pub fn letters_and_spaces(value: &str) -> Result<(), ValidationError> {
    let only_letters = value.chars().all(|c| c.is_alphabetic() || c == ' ');
    let has_letter = value.chars().any(char::is_alphabetic);
    if only_letters && has_letter {
        Ok(())
    } else {
        Err(rule_error("letters_and_spaces", "must contain only letters and spaces"))
    }
}

/// Passwords: at least one character from [`SPECIAL_CHARACTERS`]
pub fn contains_special_character(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        Ok(())
    } else {
        Err(rule_error(
            "special_character",
            "must include at least one special character",
        ))
    }
}

/// Phone numbers: exactly ten digits, not starting with zero
pub fn ten_digit_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit());
    if digits && !value.starts_with('0') {
        Ok(())
    } else {
        Err(rule_error("phone", "must be 10 digits and not start with 0"))
    }
}

/// Amounts: strictly greater than zero
pub fn positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        Err(rule_error("positive", "must be greater than 0"))
    }
}

/// Flattens validation errors into one sorted, human-readable line
pub fn summarize(errors: &ValidationErrors) -> String {
    let mut lines: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                if field == "__all__" {
                    message
                } else {
                    format!("{}: {}", field, message)
                }
            })
        })
        .collect();
    lines.sort();
    lines.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_letters_and_spaces() {
        assert!(letters_and_spaces("Ajit Singh").is_ok());
        assert!(letters_and_spaces("R2D2").is_err());
        assert!(letters_and_spaces("   ").is_err());
    }

    #[test]
    fn test_special_character() {
        assert!(contains_special_character("Pass@123").is_ok());
        assert!(contains_special_character("Password123").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(ten_digit_phone("9876543210").is_ok());
        assert!(ten_digit_phone("0876543210").is_err());
        assert!(ten_digit_phone("98765").is_err());
        assert!(ten_digit_phone("98765432a0").is_err());
    }

    #[test]
    fn test_positive_amount() {
        assert!(positive_amount(&dec!(1)).is_ok());
        assert!(positive_amount(&dec!(0)).is_err());
        assert!(positive_amount(&dec!(-3)).is_err());
    }
}
