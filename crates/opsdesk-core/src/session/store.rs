use crate::error::SessionError;

/// Trait for session storage backends.
///
/// A synchronous key/value handle. The session store owns the only writer
/// path; everything else reads through it.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, overwriting any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str);
}
