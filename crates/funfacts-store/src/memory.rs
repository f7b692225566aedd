//! In-memory key-value store

use crate::StoreError;
use funfacts_domain::KeyValueStore;
use std::collections::BTreeMap;

/// Map-backed store that forgets everything on drop
///
/// Can be switched into a failing mode to exercise error paths of callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    fail: bool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation return `StoreError::Unavailable`
    pub fn set_failing(&mut self, fail: bool) {
        self.fail = fail;
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("memory store set to fail".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    type Error = StoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.check()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
        self.check()?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));

        store.remove("a").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failing_mode() {
        let mut store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set_failing(true);

        assert!(matches!(store.get("a"), Err(StoreError::Unavailable(_))));
        assert!(store.set("b", "2").is_err());

        store.set_failing(false);
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    }
}
