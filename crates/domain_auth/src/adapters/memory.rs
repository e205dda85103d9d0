//! In-memory session storage

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::ports::{SessionStorage, StorageError};

/// Process-local storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key, e.g. to simulate a session left by a previous run
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.values.write().insert(key.into(), value.into());
        storage
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.write().remove(key);
        Ok(())
    }
}
