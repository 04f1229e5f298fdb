//! Repository for the durable session slot.
//!
//! The serialized user record lives under one fixed key; this repository
//! is the only writer of that slot. A stored value that no longer parses
//! is treated as "no session" rather than an error, so a corrupt slot can
//! never lock a user out of the login screen.

use crate::key_value_store::KeyValueStore;
use crate::{DbError, Result};

use stellar_core::{ErrorLocation, User};

use std::panic::Location;
use std::sync::Arc;

/// Fixed storage key for the serialized session record.
pub const SESSION_KEY: &str = "iot_stellar_user";

pub struct SessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the persisted session. Absence of the key means "no session";
    /// a malformed value is logged and reported the same way.
    pub async fn load(&self) -> Result<Option<User>> {
        let Some(raw) = self.store.get(SESSION_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                log::warn!("Discarding malformed persisted session record: {}", e);
                Ok(None)
            }
        }
    }

    /// Write the resident record through to durable storage.
    pub async fn save(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user).map_err(|e| DbError::Serialization {
            message: format!("Failed to serialize session record: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.store.set(SESSION_KEY, &raw).await
    }

    /// Delete the durable session entry. Deleting an absent entry is a no-op.
    pub async fn clear(&self) -> Result<()> {
        self.store.delete(SESSION_KEY).await
    }
}
