//! Storage medium abstraction.
//!
//! The store reads and writes opaque strings keyed by collection name. The
//! file-backed medium is the production path; the in-memory medium backs
//! tests and ephemeral sessions.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;

/// A keyed string store the [`DeltaStore`](crate::DeltaStore) persists
/// through.
pub trait StorageMedium {
    /// Read the value under `key`, or `None` if the key has never been
    /// written.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// One JSON file per key under a data directory.
pub struct JsonFileMedium {
    dir: PathBuf,
}

impl JsonFileMedium {
    /// Create a medium rooted at `dir`, creating the directory if needed.
    pub fn new(dir: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageMedium for JsonFileMedium {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // Write-then-rename so a crash mid-write never truncates the old file.
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory medium for tests and `--ephemeral` runs.
#[derive(Default)]
pub struct MemoryMedium {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryMedium {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, for tests that exercise the load path.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageMedium for MemoryMedium {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_medium_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let medium = JsonFileMedium::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(medium.read("k").unwrap(), None);
        medium.write("k", "[1,2]").unwrap();
        assert_eq!(medium.read("k").unwrap().as_deref(), Some("[1,2]"));
        medium.remove("k").unwrap();
        assert_eq!(medium.read("k").unwrap(), None);
        // removing again is fine
        medium.remove("k").unwrap();
    }

    #[test]
    fn file_medium_overwrite_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let medium = JsonFileMedium::new(dir.path().to_path_buf()).unwrap();
        medium.write("k", "old").unwrap();
        medium.write("k", "new").unwrap();
        assert_eq!(medium.read("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn memory_medium_roundtrips() {
        let medium = MemoryMedium::new();
        medium.write("k", "v").unwrap();
        assert_eq!(medium.read("k").unwrap().as_deref(), Some("v"));
        medium.remove("k").unwrap();
        assert_eq!(medium.read("k").unwrap(), None);
    }
}
