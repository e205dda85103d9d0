//! Auth Domain Ports
//!
//! - [`SessionStorage`]: durable key/value storage for the serialized session,
//!   the equivalent of browser local storage
//! - [`IdentityProvider`]: read access to the current identity, consumed by
//!   the policy ledger for ownership checks

use thiserror::Error;

use crate::identity::Identity;

/// Errors raised by session storage adapters
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage key '{0}' is not a valid file name")]
    InvalidKey(String),
}

/// Durable string storage keyed by name
pub trait SessionStorage: Send + Sync {
    /// Reads the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Supplies the identity that scopes data access
pub trait IdentityProvider: Send + Sync {
    fn current_identity(&self) -> Option<Identity>;
}
