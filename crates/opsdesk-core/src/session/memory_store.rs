use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::SessionError;

use super::store::StorageBackend;

/// In-process storage backend.
///
/// Stands in for the real persistence medium in tests and embedded use.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| SessionError::Write(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("k"), None);
        storage.write("k", "v").unwrap();
        assert_eq!(storage.read("k"), Some("v".to_string()));
    }

    #[test]
    fn test_memory_storage_remove_absent_key() {
        let storage = MemoryStorage::new();
        storage.remove("missing");
        storage.write("k", "v").unwrap();
        storage.remove("k");
        storage.remove("k");
        assert_eq!(storage.read("k"), None);
    }
}
