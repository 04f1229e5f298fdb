use stellar_core::ErrorLocation;
use stellar_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Password must be at least {min_len} characters {location}")]
    WeakPassword {
        min_len: usize,
        location: ErrorLocation,
    },

    #[error("Passwords do not match {location}")]
    PasswordMismatch { location: ErrorLocation },

    #[error("Provider login failed: {message} {location}")]
    Provider {
        message: String,
        location: ErrorLocation,
    },

    #[error("Email address is required {location}")]
    EmptyEmail { location: ErrorLocation },

    #[error("Session storage error: {source} {location}")]
    Vault {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn weak_password(min_len: usize) -> Self {
        Self::WeakPassword {
            min_len,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn password_mismatch() -> Self {
        Self::PasswordMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_email() -> Self {
        Self::EmptyEmail {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Clean copy for user-facing notifications (no source chain, no
    /// code location).
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials { .. } => String::from("Invalid credentials"),
            Self::WeakPassword { min_len, .. } => {
                format!("Password must be at least {} characters", min_len)
            }
            Self::PasswordMismatch { .. } => String::from("Passwords do not match"),
            Self::Provider { .. } => {
                String::from("Unable to login with Google. Please try again.")
            }
            Self::EmptyEmail { .. } => String::from("Please enter your email address"),
            Self::Vault { .. } => String::from("Something went wrong. Please try again."),
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Vault {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
