//! File-backed session storage

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ports::{SessionStorage, StorageError};

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates storage rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn io_error(key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(key, e))?;
        fs::write(&path, value).map_err(|e| Self::io_error(key, e))?;
        debug!(path = %path.display(), "Session written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session"));

        assert_eq!(storage.get("star_protect_user").unwrap(), None);
        storage.set("star_protect_user", "{}").unwrap();
        assert_eq!(storage.get("star_protect_user").unwrap(), Some("{}".to_string()));

        storage.remove("star_protect_user").unwrap();
        storage.remove("star_protect_user").unwrap();
        assert_eq!(storage.get("star_protect_user").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let storage = FileStorage::new("unused");
        assert!(matches!(storage.get("../etc"), Err(StorageError::InvalidKey(_))));
    }
}
