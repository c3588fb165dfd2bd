//! In-process storage, for tests and embedding.

use std::collections::HashMap;
use super::trait_::validate_key;
use super::{Result, Storage};

/// Storage backed by a `HashMap`. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn load_record(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.records.get(key).cloned())
    }

    async fn save_record(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_record(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.save_record("k", "v1").await.unwrap();
        storage.save_record("k", "v2").await.unwrap();
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.load_record("k").await.unwrap().as_deref(), Some("v2"));

        storage.remove_record("k").await.unwrap();
        assert!(storage.load_record("k").await.unwrap().is_none());
    }
}
