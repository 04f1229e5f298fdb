pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::user::{DEFAULT_PHOTO, PROVIDER_ID_PREFIX, User};
pub use models::user_patch::UserPatch;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
