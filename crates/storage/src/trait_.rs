//! Storage trait abstraction.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Key cannot be used as a record name
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}

/// Key-value store for serialized records.
///
/// Values are opaque strings; typed access goes through [`load_json`] and
/// [`save_json`].
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the record stored under `key`.
    async fn load_record(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous record.
    async fn save_record(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the record under `key`. Missing records are not an error.
    async fn remove_record(&mut self, key: &str) -> Result<()>;
}

/// Load and deserialize the record under `key`.
///
/// Returns `Ok(None)` when the record is absent and `Err(StorageError::Json)`
/// when it is present but unparseable.
pub async fn load_json<T, S>(storage: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
{
    match storage.load_record(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` and store it under `key`.
pub async fn save_json<T, S>(storage: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized + Sync,
    S: Storage + ?Sized,
{
    let json = serde_json::to_string_pretty(value)?;
    storage.save_record(key, &json).await
}

pub(crate) fn validate_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key.starts_with('.')
        || key.chars().any(|c| matches!(c, '/' | '\\' | '\0'));
    if bad {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
