use std::fs;
use std::path::PathBuf;

use crate::app::infrastructure::error::Result;
use crate::app::services::storage::KeyValueStore;

/// Durable key-value store keeping one JSON file per key under a data
/// directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at the platform data directory (cross-platform).
    pub fn new() -> Self {
        let mut root = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push("resupad");
        Self { root }
    }

    /// Store rooted at an explicit directory.
    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().to_path_buf());
        assert!(store.get("resume_data_v1").is_none());
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::at(dir.path().to_path_buf());
        store.set("resume_data_v1", "{\"fullName\":\"Jane\"}").unwrap();
        assert_eq!(
            store.get("resume_data_v1").as_deref(),
            Some("{\"fullName\":\"Jane\"}")
        );
    }

    #[test]
    fn test_set_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::at(dir.path().join("nested").join("deeper"));
        store.set("resume_data_v1", "{}").unwrap();
        assert_eq!(store.get("resume_data_v1").as_deref(), Some("{}"));
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::at(dir.path().to_path_buf());
        store.set("resume_data_v1", "{}").unwrap();
        store.remove("resume_data_v1").unwrap();
        assert!(store.get("resume_data_v1").is_none());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::at(dir.path().to_path_buf());
        assert!(store.remove("resume_data_v1").is_ok());
    }
}
