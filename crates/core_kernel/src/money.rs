//! Money types with precise decimal arithmetic
//!
//! Premiums are whole rupee amounts today, but they are still carried as
//! `rust_decimal` values so no floating-point rounding ever touches them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency codes following ISO 4217
///
/// Policies are only ever written in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    INR,
}

impl Currency {
    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates an amount in Indian rupees
    pub fn inr(amount: Decimal) -> Self {
        Self {
            amount,
            currency: Currency::INR,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), self.amount.round_dp(2))
    }
}
