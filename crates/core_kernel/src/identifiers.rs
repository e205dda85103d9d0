//! Strongly-typed, sequential identifiers for domain records
//!
//! Identifiers are a fixed prefix followed by a zero-padded sequence number,
//! for example `UW001` or `POL00001`. The number is the source of truth; the
//! string form is derived from it. Sequences are handed out by an
//! [`IdSequence`] owned by each directory and are never recycled.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing an identifier from text
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier '{value}' does not start with prefix {prefix}")]
    MissingPrefix {
        value: String,
        prefix: &'static str,
    },

    #[error("Identifier '{0}' has a malformed sequence number")]
    MalformedSequence(String),
}

macro_rules! define_sequential_id {
    ($name:ident, $prefix:literal, $width:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            /// Builds the identifier for a sequence number
            pub fn from_sequence(sequence: u64) -> Self {
                Self(sequence)
            }

            /// Returns the numeric part of the identifier
            pub fn sequence(&self) -> u64 {
                self.0
            }

            /// Returns the identifier prefix
            pub fn prefix() -> &'static str {
                $prefix
            }

            /// Returns the minimum number of digits after the prefix
            pub fn width() -> usize {
                $width
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{:0width$}", $prefix, self.0, width = $width)
            }
        }

        impl FromStr for $name {
            type Err = IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s.strip_prefix($prefix).ok_or_else(|| IdentifierError::MissingPrefix {
                    value: s.to_string(),
                    prefix: $prefix,
                })?;

                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(IdentifierError::MalformedSequence(s.to_string()));
                }

                let sequence: u64 = digits
                    .parse()
                    .map_err(|_| IdentifierError::MalformedSequence(s.to_string()))?;
                let id = Self(sequence);

                // Only the canonical padding is accepted, so parse and display agree
                if id.to_string() != s {
                    return Err(IdentifierError::MalformedSequence(s.to_string()));
                }
                Ok(id)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                other.parse::<$name>().map_or(false, |id| id == *self)
            }
        }
    };
}

define_sequential_id!(UnderwriterId, "UW", 3);
define_sequential_id!(PolicyId, "POL", 5);

/// Monotonic, directory-scoped sequence
///
/// The counter only moves forward. It is deliberately independent of the
/// size of the collection it numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Creates a sequence whose first value is 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates a sequence that continues from `next`
    pub fn starting_at(next: u64) -> Self {
        Self { next: next.max(1) }
    }

    /// Returns the value the next call to [`IdSequence::advance`] will hand out
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Hands out the current value and moves the counter forward
    pub fn advance(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underwriter_id_display() {
        assert_eq!(UnderwriterId::from_sequence(1).to_string(), "UW001");
        assert_eq!(UnderwriterId::from_sequence(42).to_string(), "UW042");
    }

    #[test]
    fn test_policy_id_display() {
        assert_eq!(PolicyId::from_sequence(1).to_string(), "POL00001");
    }

    #[test]
    fn test_id_parsing() {
        let parsed: PolicyId = "POL00017".parse().unwrap();
        assert_eq!(parsed.sequence(), 17);
    }

    #[test]
    fn test_non_canonical_padding_rejected() {
        assert!("UW0001".parse::<UnderwriterId>().is_err());
        assert!("UW1".parse::<UnderwriterId>().is_err());
    }

    #[test]
    fn test_sequence_advances() {
        let mut sequence = IdSequence::new();
        assert_eq!(sequence.advance(), 1);
        assert_eq!(sequence.advance(), 2);
        assert_eq!(sequence.peek(), 3);
    }
}
