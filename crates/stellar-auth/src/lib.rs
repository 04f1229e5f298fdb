pub mod delay;
pub mod error;
pub mod notification;
pub mod password;
pub mod session_manager;
pub mod session_options;
pub mod session_state;

pub use delay::{Delay, NoopDelay, TokioDelay};
pub use error::{AuthError, Result};
pub use notification::{LogNotifier, Notification, NotificationSink, Severity};
pub use password::confirm_passwords_match;
pub use session_manager::SessionManager;
pub use session_options::SessionOptions;
pub use session_state::SessionState;

#[cfg(test)]
mod tests;
