use crate::{error::StoreError, store::BlobStore};
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// Sled-backed store, the durable stand-in for the browser's local storage.
///
/// Blobs are kept as plain JSON bytes so a tree written by other tooling
/// stays readable.
pub struct SledBlobStore {
    db: sled::Db,
}

impl SledBlobStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, sled::Error> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }
}

#[async_trait]
impl BlobStore for SledBlobStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        match self.db.get(key).map_err(StoreError::backend)? {
            Some(bytes) => {
                let value = serde_json::from_slice(&bytes).map_err(|source| StoreError::Codec {
                    key: key.to_string(),
                    source,
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Codec {
            key: key.to_string(),
            source,
        })?;
        self.db.insert(key, bytes).map_err(StoreError::backend)?;

        // The cache stands in for synchronous local storage, so every write
        // is flushed before reporting success.
        self.db.flush_async().await.map_err(StoreError::backend)?;
        Ok(())
    }
}
