pub mod memory_key_value_store;
pub mod sqlite_key_value_store;
