//! Caller-side password confirmation check.

use crate::{AuthError, Result};

/// Registration screens confirm the password before calling the store;
/// the store itself never sees the confirmation field.
#[track_caller]
pub fn confirm_passwords_match(password: &str, confirmation: &str) -> Result<()> {
    if password != confirmation {
        return Err(AuthError::password_mismatch());
    }
    Ok(())
}
