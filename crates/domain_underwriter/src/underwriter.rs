//! Underwriter records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{age_on, UnderwriterId};

/// An underwriter
///
/// The password is write-only: it is kept with the record but never
/// serialized or printed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Underwriter {
    pub id: UnderwriterId,
    pub name: String,
    #[serde(alias = "dob")]
    pub date_of_birth: NaiveDate,
    pub joining_date: NaiveDate,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

impl Underwriter {
    /// Age in completed years on the joining date
    pub fn age_at_joining(&self) -> i32 {
        age_on(self.date_of_birth, self.joining_date)
    }

    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// Merges the fields present in `patch`
    pub fn apply(&mut self, patch: UnderwriterPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(joining_date) = patch.joining_date {
            self.joining_date = joining_date;
        }
        if let Some(password) = patch.password {
            self.password = Some(password);
        }
    }
}

impl fmt::Debug for Underwriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Underwriter")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("date_of_birth", &self.date_of_birth)
            .field("joining_date", &self.joining_date)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Everything needed to create an underwriter; the directory assigns the id
#[derive(Clone, PartialEq, Eq)]
pub struct NewUnderwriter {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub joining_date: NaiveDate,
    pub password: Option<String>,
}

impl NewUnderwriter {
    /// Attaches the assigned id
    pub fn with_id(self, id: UnderwriterId) -> Underwriter {
        Underwriter {
            id,
            name: self.name,
            date_of_birth: self.date_of_birth,
            joining_date: self.joining_date,
            password: self.password,
        }
    }
}

impl fmt::Debug for NewUnderwriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUnderwriter")
            .field("name", &self.name)
            .field("date_of_birth", &self.date_of_birth)
            .field("joining_date", &self.joining_date)
            .finish_non_exhaustive()
    }
}

/// Partial update of an underwriter
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UnderwriterPatch {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub joining_date: Option<NaiveDate>,
    pub password: Option<String>,
}

impl UnderwriterPatch {
    /// A patch that only replaces the password
    pub fn password(password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
            ..Default::default()
        }
    }
}

impl fmt::Debug for UnderwriterPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnderwriterPatch")
            .field("name", &self.name)
            .field("date_of_birth", &self.date_of_birth)
            .field("joining_date", &self.joining_date)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Underwriter {
        Underwriter {
            id: UnderwriterId::from_sequence(1),
            name: "Ajit Singh".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2002, 8, 2).unwrap(),
            joining_date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
            password: Some("Pass@123".to_string()),
        }
    }

    #[test]
    fn test_password_never_serialized() {
        let json = serde_json::to_string(&seeded()).unwrap();
        assert!(!json.contains("Pass@123"));
        assert!(json.contains("\"dateOfBirth\":\"2002-08-02\""));
    }

    #[test]
    fn test_debug_redacts_password() {
        assert!(!format!("{:?}", seeded()).contains("Pass@123"));
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut underwriter = seeded();
        underwriter.apply(UnderwriterPatch::password("New#Pass"));
        assert_eq!(underwriter.name, "Ajit Singh");
        assert_eq!(underwriter.password.as_deref(), Some("New#Pass"));
    }

    #[test]
    fn test_age_at_joining() {
        assert_eq!(seeded().age_at_joining(), 22);
    }
}
