//! User-facing notification plumbing (the product's toast rail).

use log::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A single toast: title, one-line description, severity styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

/// Sink for user-facing notifications. Implementations must not block
/// and must not fail the calling operation; the session store fires and
/// forgets.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default sink: forwards notifications to the log facade. UI shells
/// swap in their toast rail.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => info!("{}: {}", notification.title, notification.description),
            Severity::Error => error!("{}: {}", notification.title, notification.description),
        }
    }
}
