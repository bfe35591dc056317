use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::Value;

pub mod memory;
pub mod sled_store;

/// Client-local key-value persistence port backing the fallback caches.
///
/// Implementations hold one whole JSON document per key. `get` returns
/// `None` for keys never written; `set` overwrites unconditionally.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    async fn set(&self, key: &str, value: &Value) -> Result<(), StoreError>;
}
