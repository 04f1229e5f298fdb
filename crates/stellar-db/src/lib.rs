pub mod connection;
pub mod error;
pub mod key_value_store;
pub mod repositories;
pub mod stores;

pub use connection::{open_in_memory_pool, open_pool};
pub use error::{DbError, Result};
pub use key_value_store::KeyValueStore;
pub use repositories::session_repository::{SESSION_KEY, SessionRepository};
pub use stores::memory_key_value_store::MemoryKeyValueStore;
pub use stores::sqlite_key_value_store::SqliteKeyValueStore;
