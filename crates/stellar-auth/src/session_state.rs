use stellar_core::User;

/// Snapshot published to subscribers on every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True while a session operation is in flight (including the
    /// initial restore).
    pub loading: bool,
}

impl SessionState {
    /// Startup state: restoring the persisted session, nobody resident yet.
    pub fn restoring() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
