//! Key-value port over the client's durable storage.

use crate::Result;

use async_trait::async_trait;

/// Boundary between the session layer and whatever holds its bytes.
/// Implementations must tolerate concurrent readers; the session layer
/// guarantees a single writer.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
