use stellar_db::{SqliteKeyValueStore, open_in_memory_pool};

/// Creates a key-value store over an in-memory SQLite pool with
/// migrations run
pub async fn create_test_store() -> SqliteKeyValueStore {
    let pool = open_in_memory_pool()
        .await
        .expect("Failed to create test pool");

    SqliteKeyValueStore::new(pool)
}
