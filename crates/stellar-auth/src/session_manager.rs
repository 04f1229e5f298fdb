//! The session store: single source of truth for "who is logged in".
//!
//! Mutating operations serialize on an internal mutex so the durable
//! slot never sees interleaved writes. Delayed operations follow a fixed
//! loading contract: loading goes true, the artificial latency elapses,
//! the operation resolves or rejects, loading goes false. A new identity
//! is written through to the vault before it becomes visible in memory,
//! so the two copies can never diverge.

use crate::{
    AuthError, Delay, Notification, NotificationSink, Result, SessionOptions, SessionState,
};

use stellar_core::{User, UserPatch};
use stellar_db::SessionRepository;

use std::sync::Arc;

use tokio::sync::{Mutex, watch};

/// Fixed identity handed out by the simulated provider flow.
const PROVIDER_EMAIL: &str = "user@gmail.com";
const PROVIDER_NAME: &str = "Google User";

pub struct SessionManager {
    repository: SessionRepository,
    notifier: Arc<dyn NotificationSink>,
    delay: Arc<dyn Delay>,
    options: SessionOptions,
    state: watch::Sender<SessionState>,
    write_lock: Mutex<()>,
}

impl SessionManager {
    pub fn new(
        repository: SessionRepository,
        notifier: Arc<dyn NotificationSink>,
        delay: Arc<dyn Delay>,
        options: SessionOptions,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::restoring());
        Self {
            repository,
            notifier,
            delay,
            options,
            state,
            write_lock: Mutex::new(()),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribe to state transitions. Receivers observe loading flips
    /// and every change of the resident user.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Restore the persisted session. Runs once at startup and never
    /// fails: a corrupt or unreadable slot leaves the session anonymous.
    pub async fn initialize(&self) {
        let _guard = self.write_lock.lock().await;

        let user = match self.repository.load().await {
            Ok(user) => user,
            Err(e) => {
                log::error!("Failed to read persisted session, starting anonymous: {}", e);
                None
            }
        };

        self.state.send_replace(SessionState {
            user,
            loading: false,
        });
    }

    /// Simulated credential login. On success the new identity replaces
    /// any resident session.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let _guard = self.write_lock.lock().await;
        self.set_loading(true);

        let result = self.login_inner(email, password).await;

        self.set_loading(false);
        match &result {
            Ok(_) => self.notifier.notify(Notification::info(
                "Login Successful",
                "Welcome back to IoT Stellar!",
            )),
            Err(e) => self
                .notifier
                .notify(Notification::error("Login Failed", e.user_message())),
        }
        result
    }

    async fn login_inner(&self, email: &str, password: &str) -> Result<User> {
        self.delay.sleep(self.options.simulated_latency).await;

        if password.chars().count() < self.options.min_password_len {
            return Err(AuthError::invalid_credentials());
        }

        self.commit(User::new(email, None)).await
    }

    /// Simulated account creation. Same shape as login with a weak
    /// password error instead of invalid credentials.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<User> {
        let _guard = self.write_lock.lock().await;
        self.set_loading(true);

        let result = self.register_inner(email, password, name).await;

        self.set_loading(false);
        match &result {
            Ok(_) => self.notifier.notify(Notification::info(
                "Registration Successful",
                "Your account has been created successfully!",
            )),
            Err(e) => self
                .notifier
                .notify(Notification::error("Registration Failed", e.user_message())),
        }
        result
    }

    async fn register_inner(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<User> {
        self.delay.sleep(self.options.simulated_latency).await;

        if password.chars().count() < self.options.min_password_len {
            return Err(AuthError::weak_password(self.options.min_password_len));
        }

        self.commit(User::new(email, name.map(String::from))).await
    }

    /// Simulated provider login. Always succeeds in the default flow and
    /// yields the fixed placeholder identity under a namespaced id.
    pub async fn provider_login(&self) -> Result<User> {
        let _guard = self.write_lock.lock().await;
        self.set_loading(true);

        let result = self.provider_login_inner().await;

        self.set_loading(false);
        match &result {
            Ok(_) => self.notifier.notify(Notification::info(
                "Google Login Successful",
                "Welcome to IoT Stellar!",
            )),
            Err(e) => self
                .notifier
                .notify(Notification::error("Google Login Failed", e.user_message())),
        }
        result
    }

    async fn provider_login_inner(&self) -> Result<User> {
        self.delay.sleep(self.options.simulated_latency).await;

        self.commit(User::provider(PROVIDER_EMAIL, Some(PROVIDER_NAME.to_string())))
            .await
            .map_err(|e| AuthError::provider(e.to_string()))
    }

    /// End the session. No artificial delay. Memory is cleared first so
    /// the caller is guaranteed anonymous even if the durable delete
    /// fails; calling while already anonymous is a no-op.
    pub async fn logout(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        self.state.send_modify(|state| state.user = None);

        let result = self.repository.clear().await;

        match result {
            Ok(()) => {
                self.notifier.notify(Notification::info(
                    "Logged Out",
                    "You have been logged out successfully.",
                ));
                Ok(())
            }
            Err(e) => {
                let err = AuthError::from(e);
                self.notifier
                    .notify(Notification::error("Logout Failed", err.user_message()));
                Err(err)
            }
        }
    }

    /// Merge a partial update into the resident record. A guarded no-op
    /// while anonymous: there is nothing to update and nothing is
    /// written. The merged record is persisted before it becomes
    /// visible, and the id is never touched.
    pub async fn update_profile(&self, patch: &UserPatch) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let Some(mut user) = self.state.borrow().user.clone() else {
            return Ok(());
        };

        patch.apply(&mut user);

        if let Err(e) = self.repository.save(&user).await {
            let err = AuthError::from(e);
            self.notifier.notify(Notification::error(
                "Profile Update Failed",
                err.user_message(),
            ));
            return Err(err);
        }

        self.state.send_modify(|state| state.user = Some(user));
        self.notifier.notify(Notification::info(
            "Profile Updated",
            "Your profile information has been updated successfully.",
        ));
        Ok(())
    }

    /// Simulated password-reset email. Never touches the resident
    /// session or the durable slot.
    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        if email.trim().is_empty() {
            let err = AuthError::empty_email();
            self.notifier
                .notify(Notification::error("Error", err.user_message()));
            return Err(err);
        }

        self.delay.sleep(self.options.reset_latency).await;

        self.notifier.notify(Notification::info(
            "Reset Email Sent",
            "Check your inbox for password reset instructions",
        ));
        Ok(())
    }

    /// Persist a fresh identity, then make it the resident user.
    async fn commit(&self, user: User) -> Result<User> {
        self.repository.save(&user).await?;
        self.state.send_modify(|state| state.user = Some(user.clone()));
        Ok(user)
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_modify(|state| state.loading = loading);
    }
}
