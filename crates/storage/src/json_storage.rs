//! JSON file storage implementation.
//!
//! Each record lives in its own `<key>.json` file under the root directory,
//! the on-disk counterpart of a browser's local storage.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use super::trait_::validate_key;
use super::{Result, Storage};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn record_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json.tmp", key))
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn load_record(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_record(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.record_path(key)?;
        // Write beside the record, then rename over it so a crash never leaves
        // a truncated record behind.
        let tmp = self.temp_path(key);
        fs::write(&tmp, value.as_bytes()).await?;
        fs::rename(&tmp, &path).await?;
        debug!("Saved record {} ({} bytes)", key, value.len());
        Ok(())
    }

    async fn remove_record(&mut self, key: &str) -> Result<()> {
        let path = self.record_path(key)?;
        fs::remove_file(&path).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
        })?;
        Ok(())
    }
}
