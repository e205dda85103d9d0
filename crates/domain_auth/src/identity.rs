//! The signed-in identity

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::UnderwriterId;

/// Role of a signed-in identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Underwriter,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Underwriter => f.write_str("underwriter"),
        }
    }
}

/// The identity currently using the application
///
/// This is also the persisted session format: a JSON object with `id`,
/// `name`, `email` and `role`. The longer field names `displayName` and
/// `contactEmail` are accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(alias = "displayName")]
    pub name: String,
    #[serde(alias = "contactEmail")]
    pub email: String,
    pub role: Role,
}

impl Identity {
    /// The built-in administrator
    pub fn admin() -> Self {
        Self {
            id: "admin-001".to_string(),
            name: "System Admin".to_string(),
            email: "admin".to_string(),
            role: Role::Admin,
        }
    }

    /// Identity for an underwriter who signed in with `login_name`
    pub fn underwriter(id: UnderwriterId, login_name: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Underwriter {}", id),
            email: login_name.into(),
            role: Role::Underwriter,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// The underwriter id, when this identity is an underwriter
    pub fn underwriter_id(&self) -> Option<UnderwriterId> {
        match self.role {
            Role::Underwriter => self.id.parse().ok(),
            Role::Admin => None,
        }
    }
}
