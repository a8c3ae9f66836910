use std::collections::HashMap;

use tracing::warn;

use crate::app::domain::resume::ResumeData;
use crate::app::infrastructure::error::Result;

/// Fixed key the résumé snapshot is stored under.
pub const RECORD_KEY: &str = "resume_data_v1";

/// Abstract durable key-value store backing the persistence adapter.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Volatile backend, used in tests and available as a no-persistence mode.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Persistence adapter: holds the single latest résumé snapshot, serialized
/// as JSON under [`RECORD_KEY`]. Latest write wins; there is no history.
pub struct RecordStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn save(&mut self, data: &ResumeData) -> Result<()> {
        let json = data.to_json()?;
        self.backend.set(RECORD_KEY, &json)
    }

    /// Load the stored snapshot. A missing record and an unparseable record
    /// both come back as `None`; the latter is logged and swallowed.
    pub fn load(&self) -> Option<ResumeData> {
        let raw = self.backend.get(RECORD_KEY)?;
        match ResumeData::from_json(&raw) {
            Ok(data) => Some(data),
            Err(e) => {
                warn!("failed to parse saved resume record: {}", e);
                None
            }
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove(RECORD_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_absent_record() {
        let store = RecordStore::new(MemoryStore::new());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = RecordStore::new(MemoryStore::new());
        let data = ResumeData {
            full_name: "Jane Doe".to_string(),
            projects: Some(vec!["CLI tool".to_string()]),
            ..Default::default()
        };
        store.save(&data).unwrap();
        assert_eq!(store.load(), Some(data));
    }

    #[test]
    fn test_latest_write_wins() {
        let mut store = RecordStore::new(MemoryStore::new());
        let first = ResumeData {
            full_name: "First".to_string(),
            ..Default::default()
        };
        let second = ResumeData {
            full_name: "Second".to_string(),
            ..Default::default()
        };
        store.save(&first).unwrap();
        store.save(&second).unwrap();
        assert_eq!(store.load().unwrap().full_name, "Second");
    }

    #[test]
    fn test_corrupt_record_loads_as_absent() {
        let mut backend = MemoryStore::new();
        backend.set(RECORD_KEY, "{definitely not json").unwrap();
        let store = RecordStore::new(backend);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_removes_record() {
        let mut store = RecordStore::new(MemoryStore::new());
        store.save(&ResumeData::default()).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
    }
}
