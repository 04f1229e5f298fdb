//! Shallow-merge patch applied to the resident user by profile updates.

use crate::models::user::User;
use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Partial profile update. Every field is optional; `apply` overwrites
/// the present fields and leaves absent ones untouched. The id is never
/// part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
}

impl UserPatch {
    /// Check if no field is present (applying would change nothing)
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.phone.is_none()
            && self.date_of_birth.is_none()
            && self.photo.is_none()
            && self.notifications_enabled.is_none()
    }

    /// Overwrite each present field on the target record.
    pub fn apply(&self, user: &mut User) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(name) = &self.name {
            user.name = Some(name.clone());
        }
        if let Some(phone) = &self.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(date_of_birth) = self.date_of_birth {
            user.date_of_birth = Some(date_of_birth);
        }
        if let Some(photo) = &self.photo {
            user.photo = Some(photo.clone());
        }
        if let Some(notifications_enabled) = self.notifications_enabled {
            user.notifications_enabled = Some(notifications_enabled);
        }
    }

    /// Set the date of birth from a form-style `YYYY-MM-DD` string.
    #[track_caller]
    pub fn with_date_of_birth_str(mut self, value: &str) -> Result<Self> {
        let parsed =
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| CoreError::InvalidDate {
                value: value.to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;
        self.date_of_birth = Some(parsed);
        Ok(self)
    }
}
