//! Demo credential registry for underwriters
//!
//! One entry per underwriter id, holding the login name and password the
//! underwriter signs in with. The registry is a second source of truth next to
//! the underwriter directory: nothing here checks that an id actually exists
//! there, and callers are expected to update both together.

use std::collections::BTreeMap;
use std::fmt;

use core_kernel::UnderwriterId;

/// Login details for one underwriter
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialEntry {
    pub login_name: String,
    password: String,
}

impl CredentialEntry {
    pub fn new(login_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login_name: login_name.into(),
            password: password.into(),
        }
    }

    /// Checks a login attempt against this entry
    pub fn matches(&self, login_name: &str, password: &str) -> bool {
        self.login_name == login_name && self.password == password
    }
}

impl fmt::Debug for CredentialEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialEntry")
            .field("login_name", &self.login_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Mapping of underwriter id to login credentials
#[derive(Debug, Clone, Default)]
pub struct CredentialRegistry {
    entries: BTreeMap<UnderwriterId, CredentialEntry>,
}

impl CredentialRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the seeded demo underwriter (`underwriter1` / `Pass@123`)
    pub fn demo() -> Self {
        let mut registry = Self::new();
        registry.insert(
            UnderwriterId::from_sequence(1),
            CredentialEntry::new("underwriter1", "Pass@123"),
        );
        registry
    }

    /// Login name given to underwriters registered after startup
    pub fn login_name_for(id: UnderwriterId) -> String {
        format!("underwriter{}", id)
    }

    /// Inserts or replaces an entry
    pub fn insert(&mut self, id: UnderwriterId, entry: CredentialEntry) {
        self.entries.insert(id, entry);
    }

    /// Registers credentials for a newly created underwriter
    ///
    /// Returns the login name the underwriter signs in with. An existing
    /// entry for the same id is replaced.
    pub fn register(&mut self, id: UnderwriterId, password: impl Into<String>) -> String {
        let login_name = Self::login_name_for(id);
        self.insert(id, CredentialEntry::new(login_name.clone(), password));
        login_name
    }

    /// Replaces the password of an existing entry
    ///
    /// Returns false when the id has no entry.
    pub fn change_password(&mut self, id: UnderwriterId, new_password: impl Into<String>) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.password = new_password.into();
                true
            }
            None => false,
        }
    }

    /// Finds the underwriter whose credentials match, scanning in id order
    pub fn find_match(&self, login_name: &str, password: &str) -> Option<(UnderwriterId, &CredentialEntry)> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.matches(login_name, password))
            .map(|(id, entry)| (*id, entry))
    }

    /// Returns the entry for an id
    pub fn get(&self, id: UnderwriterId) -> Option<&CredentialEntry> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: UnderwriterId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
