//! Persisted key-value mirror of the session.
//!
//! The store holds one opaque serialized blob, surviving application
//! restarts the way browser local storage survives reloads. Reads and
//! writes are synchronous and cheap; callers treat every error as
//! "no session".

use std::path::PathBuf;
use std::sync::Mutex;

use lexhub_core::error::AppError;
use lexhub_core::result::AppResult;

/// Storage for the serialized session blob.
pub trait SessionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Read the persisted blob, if any.
    fn read(&self) -> AppResult<Option<String>>;

    /// Replace the persisted blob.
    fn write(&self, blob: &str) -> AppResult<()>;

    /// Remove the persisted blob. Removing an absent blob is not an
    /// error.
    fn clear(&self) -> AppResult<()>;
}

/// File-backed session store.
#[derive(Debug)]
pub struct FileSessionStore {
    /// Path of the session file.
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store at the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self) -> AppResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    fn write(&self, blob: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, blob)?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::from(e)),
        }
    }
}

/// In-memory session store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    blob: Mutex<Option<String>>,
}

impl MemorySessionStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> AppResult<Option<String>> {
        Ok(self.blob.lock().unwrap().clone())
    }

    fn write(&self, blob: &str) -> AppResult<()> {
        *self.blob.lock().unwrap() = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.blob.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.read().unwrap(), None);
        store.write("{\"id\":1}").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("{\"id\":1}"));
        store.clear().unwrap();
        assert_eq!(store.read().unwrap(), None);
        // Clearing twice is a no-op.
        store.clear().unwrap();
    }
}
