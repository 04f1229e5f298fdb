//! User entity - the single resident identity record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bundled placeholder avatar assigned to every fresh account.
pub const DEFAULT_PHOTO: &str = "assets/default-avatar.png";

/// Id prefix for accounts created through the external identity provider.
/// Settings screens key off this prefix to lock the email field.
pub const PROVIDER_ID_PREFIX: &str = "google-";

/// The one durable identity record. At most one user is resident at a
/// time; a new login or registration replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier, immutable once assigned.
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    /// Data URL or bundled asset path.
    pub photo: Option<String>,
    pub notifications_enabled: Option<bool>,
}

impl User {
    /// Create a direct-registration user with a freshly generated id,
    /// notifications on, and the placeholder avatar.
    pub fn new(email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            name,
            phone: None,
            date_of_birth: None,
            photo: Some(String::from(DEFAULT_PHOTO)),
            notifications_enabled: Some(true),
        }
    }

    /// Create a user for a provider-backed login. The id carries the
    /// provider namespace so it can never collide with a direct id.
    pub fn provider(email: impl Into<String>, name: Option<String>) -> Self {
        let mut user = Self::new(email, name);
        user.id = format!("{}{}", PROVIDER_ID_PREFIX, Uuid::new_v4());
        user
    }

    /// Check if this account came from the external identity provider
    pub fn is_provider_account(&self) -> bool {
        self.id.starts_with(PROVIDER_ID_PREFIX)
    }

    /// Notification opt-in; records that never had the flag set count as on
    pub fn notifications_on(&self) -> bool {
        self.notifications_enabled.unwrap_or(true)
    }
}
