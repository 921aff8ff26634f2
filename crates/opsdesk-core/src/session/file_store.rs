use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::SessionError;

use super::store::StorageBackend;

/// File-based storage backend.
///
/// Each key maps to one JSON file under the data directory. Writes go
/// straight to disk; two processes sharing a data directory race with
/// last-writer-wins semantics, as the medium has no transactional
/// primitive.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &Path) -> Self {
        std::fs::create_dir_all(dir).ok();
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key);
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        std::fs::write(self.entry_path(key), value)
            .map_err(|e| SessionError::Write(e.to_string()))
    }

    fn remove(&self, key: &str) {
        let path = self.entry_path(key);
        if path.exists() {
            if let Err(e) = std::fs::remove_file(&path) {
                warn!("Failed to remove {}: {}", path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path());

        assert_eq!(storage.read("session"), None);
        storage.write("session", "{\"a\":1}").unwrap();
        assert_eq!(storage.read("session"), Some("{\"a\":1}".to_string()));
        assert!(tmp.path().join("session.json").exists());
    }

    #[test]
    fn test_file_storage_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path());

        storage.write("session", "first").unwrap();
        storage.write("session", "second").unwrap();
        assert_eq!(storage.read("session"), Some("second".to_string()));
    }

    #[test]
    fn test_file_storage_remove_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path());

        storage.remove("session");
        storage.write("session", "v").unwrap();
        storage.remove("session");
        storage.remove("session");
        assert_eq!(storage.read("session"), None);
    }
}
